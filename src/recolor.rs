/// SVG colour rewriting
///
/// Works on the raw document text: paint attributes are located with regular
/// expressions and rewritten in place, everything else is left untouched.
use regex::{Captures, Regex};

/// Which rewrite rule produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecolorRule {
    /// Non-`none` fill values replaced
    Fill,
    /// Non-`none` stroke values replaced (or every stroke, stroke-first mode)
    Stroke,
    /// `fill` injected into `<path>` tags
    InjectedFill,
    /// No paint attributes and no `<path>` to inject into
    NoPaintTarget,
    /// Text left as it was
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recolored {
    pub text: String,
    pub rule: RecolorRule,
}

impl Recolored {
    fn unchanged(text: &str, rule: RecolorRule) -> Self {
        Self {
            text: text.to_string(),
            rule,
        }
    }
}

/// Compiled attribute patterns
pub struct Recolorer {
    fill: Regex,
    stroke: Regex,
    path_open: Regex,
}

impl Recolorer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            fill: attribute_pattern("fill")?,
            stroke: attribute_pattern("stroke")?,
            path_open: Regex::new(r"<path\b(?P<attrs>[^>]*?)(?P<close>/?)>")?,
        })
    }

    /// General policy: fill first, then stroke, then fill injection.
    ///
    /// `fill="none"` / `stroke="none"` never count as a paint to replace and
    /// are kept as they are.
    pub fn recolor(&self, svg: &str, color: &str) -> Recolored {
        if has_paint(&self.fill, svg) {
            return Recolored {
                text: replace_values(&self.fill, svg, color, true),
                rule: RecolorRule::Fill,
            };
        }

        if has_paint(&self.stroke, svg) {
            return Recolored {
                text: replace_values(&self.stroke, svg, color, true),
                rule: RecolorRule::Stroke,
            };
        }

        if !self.fill.is_match(svg) && !self.stroke.is_match(svg) {
            if !self.path_open.is_match(svg) {
                return Recolored::unchanged(svg, RecolorRule::NoPaintTarget);
            }
            let text = self
                .path_open
                .replace_all(svg, |caps: &Captures| {
                    format!(
                        "<path{} fill=\"{}\"{}>",
                        &caps["attrs"], color, &caps["close"]
                    )
                })
                .into_owned();
            return Recolored {
                text,
                rule: RecolorRule::InjectedFill,
            };
        }

        Recolored::unchanged(svg, RecolorRule::Unchanged)
    }

    /// Stroke-first policy used for active navigation icons.
    ///
    /// Every stroke value is replaced when any stroke attribute exists,
    /// otherwise every fill value. Never injects attributes.
    pub fn recolor_stroke_first(&self, svg: &str, color: &str) -> Recolored {
        if self.stroke.is_match(svg) {
            return Recolored {
                text: replace_values(&self.stroke, svg, color, false),
                rule: RecolorRule::Stroke,
            };
        }

        if self.fill.is_match(svg) {
            return Recolored {
                text: replace_values(&self.fill, svg, color, false),
                rule: RecolorRule::Fill,
            };
        }

        Recolored::unchanged(svg, RecolorRule::Unchanged)
    }
}

/// Attribute preceded by whitespace, so `data-fill` and `fill-rule` do not
/// match. Either quote style is accepted.
fn attribute_pattern(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r#"(?P<lead>\s){name}\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#
    ))
}

/// The quoted value, whichever quote style matched
fn value_of<'h>(caps: &Captures<'h>) -> Option<regex::Match<'h>> {
    caps.name("dq").or_else(|| caps.name("sq"))
}

fn has_paint(pattern: &Regex, svg: &str) -> bool {
    pattern
        .captures_iter(svg)
        .any(|caps| value_of(&caps).map_or(false, |v| !is_none(v.as_str())))
}

fn replace_values(pattern: &Regex, svg: &str, color: &str, keep_none: bool) -> String {
    pattern
        .replace_all(svg, |caps: &Captures| {
            let whole = &caps[0];
            let Some(value) = value_of(caps) else {
                return whole.to_string();
            };
            if keep_none && is_none(value.as_str()) {
                return whole.to_string();
            }
            let value = value.range();
            let start = caps.get(0).map_or(0, |m| m.start());
            // Keep the attribute name and spacing exactly as written
            format!(
                "{}{}{}",
                &whole[..value.start - start],
                color,
                &whole[value.end - start..]
            )
        })
        .into_owned()
}

fn is_none(value: &str) -> bool {
    value.trim() == "none"
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEME: &str = "#1890ff";

    fn recolorer() -> Recolorer {
        Recolorer::new().unwrap()
    }

    #[test]
    fn test_fill_replaced() {
        let svg = r#"<svg viewBox="0 0 24 24"><path fill="red" d="M0 0h24v24H0z"/></svg>"#;
        let out = recolorer().recolor(svg, THEME);

        assert_eq!(out.rule, RecolorRule::Fill);
        assert!(out.text.contains(r##"fill="#1890ff""##));
        assert!(!out.text.contains(r#"fill="red""#));
    }

    #[test]
    fn test_fill_none_kept_next_to_real_fill() {
        let svg = r##"<svg fill="none"><path fill="#333" d="M1 1"/><rect fill="#333"/></svg>"##;
        let out = recolorer().recolor(svg, THEME);

        assert_eq!(out.rule, RecolorRule::Fill);
        assert_eq!(
            out.text,
            r##"<svg fill="none"><path fill="#1890ff" d="M1 1"/><rect fill="#1890ff"/></svg>"##
        );
    }

    #[test]
    fn test_stroke_wins_when_fill_is_none() {
        let svg = r#"<svg fill="none" stroke="blue"><path d="M2 2L4 4"/></svg>"#;
        let out = recolorer().recolor(svg, THEME);

        assert_eq!(out.rule, RecolorRule::Stroke);
        assert_eq!(
            out.text,
            r##"<svg fill="none" stroke="#1890ff"><path d="M2 2L4 4"/></svg>"##
        );
    }

    #[test]
    fn test_fill_injected_into_every_path() {
        let svg = r#"<svg><path d="M0 0"/><g><path d="M1 1"></path></g><path></path></svg>"#;
        let out = recolorer().recolor(svg, THEME);

        assert_eq!(out.rule, RecolorRule::InjectedFill);
        assert_eq!(
            out.text,
            r##"<svg><path d="M0 0" fill="#1890ff"/><g><path d="M1 1" fill="#1890ff"></path></g><path fill="#1890ff"></path></svg>"##
        );
        assert_eq!(out.text.matches("<path").count(), svg.matches("<path").count());
    }

    #[test]
    fn test_injection_ignores_similar_tags() {
        let svg = r#"<svg><pathology d="x"/><path d="M0 0"/></svg>"#;
        let out = recolorer().recolor(svg, THEME);
        assert!(out.text.contains(r#"<pathology d="x"/>"#));
        assert!(out.text.contains(r##"<path d="M0 0" fill="#1890ff"/>"##));
    }

    #[test]
    fn test_no_path_to_inject_into() {
        let svg = r#"<svg><circle cx="12" cy="12" r="10"/></svg>"#;
        let out = recolorer().recolor(svg, THEME);

        assert_eq!(out.rule, RecolorRule::NoPaintTarget);
        assert_eq!(out.text, svg);
    }

    #[test]
    fn test_fill_none_only_passes_through() {
        let svg = r#"<svg fill="none" stroke="none"><path d="M0 0"/></svg>"#;
        let out = recolorer().recolor(svg, THEME);

        assert_eq!(out.rule, RecolorRule::Unchanged);
        assert_eq!(out.text, svg);
    }

    #[test]
    fn test_related_attributes_untouched() {
        let svg = r##"<svg><path fill-rule="evenodd" stroke-width="2" data-fill="x" fill="#000"/></svg>"##;
        let out = recolorer().recolor(svg, "#ff6b35");

        assert_eq!(
            out.text,
            r##"<svg><path fill-rule="evenodd" stroke-width="2" data-fill="x" fill="#ff6b35"/></svg>"##
        );
    }

    #[test]
    fn test_stroke_first_prefers_stroke() {
        let svg = r##"<svg fill="none" stroke="#999"><path fill="#999" d="M0 0"/></svg>"##;
        let out = recolorer().recolor_stroke_first(svg, THEME);

        assert_eq!(out.rule, RecolorRule::Stroke);
        assert_eq!(
            out.text,
            r##"<svg fill="none" stroke="#1890ff"><path fill="#999" d="M0 0"/></svg>"##
        );
    }

    #[test]
    fn test_stroke_first_falls_back_to_fill_without_injection() {
        let filled = r##"<svg><path fill="#999" d="M0 0"/></svg>"##;
        let out = recolorer().recolor_stroke_first(filled, THEME);
        assert_eq!(out.rule, RecolorRule::Fill);
        assert_eq!(out.text, r##"<svg><path fill="#1890ff" d="M0 0"/></svg>"##);

        let bare = r#"<svg><path d="M0 0"/></svg>"#;
        let out = recolorer().recolor_stroke_first(bare, THEME);
        assert_eq!(out.rule, RecolorRule::Unchanged);
        assert_eq!(out.text, bare);
    }

    #[test]
    fn test_single_quoted_fill_replaced_not_duplicated() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path fill='#333333' d='M0 0h24v24H0z'/></svg>";
        let out = recolorer().recolor(svg, THEME);

        assert_eq!(out.rule, RecolorRule::Fill);
        assert_eq!(
            out.text,
            "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path fill='#1890ff' d='M0 0h24v24H0z'/></svg>"
        );
        assert_eq!(out.text.matches("fill=").count(), 1);
    }

    #[test]
    fn test_single_quoted_stroke_replaced() {
        let svg = "<svg fill='none' stroke='#999'><path d='M2 2L4 4'/></svg>";
        let out = recolorer().recolor(svg, THEME);

        assert_eq!(out.rule, RecolorRule::Stroke);
        assert_eq!(out.text, "<svg fill='none' stroke='#1890ff'><path d='M2 2L4 4'/></svg>");
    }

    #[test]
    fn test_single_quoted_none_blocks_injection() {
        let svg = "<svg fill='none' stroke='none'><path d='M0 0'/></svg>";
        let out = recolorer().recolor(svg, THEME);

        assert_eq!(out.rule, RecolorRule::Unchanged);
        assert_eq!(out.text, svg);
    }

    #[test]
    fn test_stroke_first_single_quoted() {
        let svg = "<svg fill='none' stroke='#999'><path d='M0 0'/></svg>";
        let out = recolorer().recolor_stroke_first(svg, THEME);

        assert_eq!(out.rule, RecolorRule::Stroke);
        assert_eq!(out.text, "<svg fill='none' stroke='#1890ff'><path d='M0 0'/></svg>");
    }

    #[test]
    fn test_mixed_quote_styles() {
        let svg = r##"<svg><path fill='#111' d="M0 0"/><rect fill="#222"/></svg>"##;
        let out = recolorer().recolor(svg, THEME);

        assert_eq!(
            out.text,
            r##"<svg><path fill='#1890ff' d="M0 0"/><rect fill="#1890ff"/></svg>"##
        );
    }
}
