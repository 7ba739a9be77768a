//! Function node handler
//!
//! `$[name.args children]` directives apply a named visual transform to
//! their rendered children. Recognized names map to a class, an inline
//! `transform` style computed from validated numeric arguments, or
//! both. Anything else - unknown name, or a name that yields neither
//! class nor style - falls back to rendering the children bare, so a
//! typo'd directive still shows its content.

use crate::ast::{FnArgs, MfmNode};
use crate::emoji::CustomEmojiMapper;
use crate::node::{Children, Element};

use super::render;

/// Render a function node. Returns the wrapped children, or the
/// children unwrapped when no transform applies.
pub fn render_function(
    name: &str,
    args: &FnArgs,
    children: &[MfmNode],
    mapper: Option<&dyn CustomEmojiMapper>,
) -> Children {
    let mut class = None;
    let mut style = None;
    match name {
        "x2" => class = Some("mfm-x2"),
        "x3" => class = Some("mfm-x3"),
        "x4" => class = Some("mfm-x4"),
        "flip" => class = Some("mfm-flip"),
        "scale" => {
            let x = numeric_or(args, "x", "1");
            let y = numeric_or(args, "y", "1");
            style = Some(format!("transform: scale({x}, {y})"));
        }
        "position" => {
            let x = numeric_or(args, "x", "0");
            let y = numeric_or(args, "y", "0");
            style = Some(format!("transform: translate({x}em, {y}em)"));
        }
        "rotate" => {
            let deg = numeric_or(args, "deg", "90");
            style = Some(format!("transform: rotate({deg}deg)"));
        }
        _ => {}
    }

    let rendered = render(children, mapper);
    if class.is_none() && style.is_none() {
        return rendered;
    }

    let mut span = Element::new("span");
    if let Some(class) = class {
        span = span.with_class(class);
    }
    if let Some(style) = style {
        span = span.attr("style", style);
    }
    let mut out = Children::new();
    out.push(span.extend(rendered).into());
    out
}

/// Argument value if present and a valid unsigned decimal string,
/// otherwise the default. Flags and malformed values count as absent.
fn numeric_or<'a>(args: &'a FnArgs, key: &str, default: &'a str) -> &'a str {
    match args.value(key) {
        Some(v) if is_unsigned_decimal(v) => v,
        _ => default,
    }
}

/// Digits with an optional `.` + digits fraction. No sign, no exponent,
/// no bare trailing dot.
fn is_unsigned_decimal(s: &str) -> bool {
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (s, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fn_node(name: &str, args: FnArgs) -> MfmNode {
        MfmNode::Fn {
            name: name.into(),
            args,
            children: vec![MfmNode::text("hi")],
        }
    }

    fn render_one(node: &MfmNode) -> Children {
        render(std::slice::from_ref(node), None)
    }

    #[test]
    fn test_size_classes() {
        for (name, class) in [("x2", "mfm-x2"), ("x3", "mfm-x3"), ("x4", "mfm-x4")] {
            let out = render_one(&fn_node(name, FnArgs::new()));
            let span = out[0].as_element().unwrap();
            assert_eq!(span.class(), Some(class));
            assert!(!span.has_attr("style"));
            assert_eq!(span.text_content(), "hi");
        }
    }

    #[test]
    fn test_flip() {
        let out = render_one(&fn_node("flip", FnArgs::new()));
        assert_eq!(out[0].as_element().unwrap().class(), Some("mfm-flip"));
    }

    #[test]
    fn test_scale_with_args() {
        let out = render_one(&fn_node("scale", FnArgs::new().with("x", "2").with("y", "0.5")));
        let span = out[0].as_element().unwrap();
        assert_eq!(span.get_attr("style"), Some("transform: scale(2, 0.5)"));
    }

    #[test]
    fn test_scale_defaults() {
        let out = render_one(&fn_node("scale", FnArgs::new()));
        let span = out[0].as_element().unwrap();
        assert_eq!(span.get_attr("style"), Some("transform: scale(1, 1)"));
    }

    #[test]
    fn test_position_defaults_and_units() {
        let out = render_one(&fn_node("position", FnArgs::new().with("x", "1.5")));
        let span = out[0].as_element().unwrap();
        assert_eq!(
            span.get_attr("style"),
            Some("transform: translate(1.5em, 0em)")
        );
    }

    #[test]
    fn test_rotate_default_90() {
        let out = render_one(&fn_node("rotate", FnArgs::new()));
        let span = out[0].as_element().unwrap();
        assert_eq!(span.get_attr("style"), Some("transform: rotate(90deg)"));
    }

    #[test]
    fn test_invalid_numeric_falls_back_to_default() {
        for bad in ["-1", "1.", ".5", "2e3", "abc", "1.2.3", ""] {
            let out = render_one(&fn_node("rotate", FnArgs::new().with("deg", bad)));
            let span = out[0].as_element().unwrap();
            assert_eq!(
                span.get_attr("style"),
                Some("transform: rotate(90deg)"),
                "value {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_flag_argument_counts_as_absent() {
        let out = render_one(&fn_node("scale", FnArgs::new().with_flag("x")));
        let span = out[0].as_element().unwrap();
        assert_eq!(span.get_attr("style"), Some("transform: scale(1, 1)"));
    }

    #[test]
    fn test_unknown_name_renders_children_bare() {
        let children = vec![MfmNode::text("hi"), MfmNode::Hashtag("tag".into())];
        let unknown = MfmNode::Fn {
            name: "sparkle".into(),
            args: FnArgs::new(),
            children: children.clone(),
        };

        // Structurally identical to a Plain node with the same children
        let via_fn = render_one(&unknown);
        let via_plain = render_one(&MfmNode::Plain(children));
        assert_eq!(via_fn, via_plain);
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let out = render_one(&fn_node("X2", FnArgs::new()));
        // No wrapper at all
        assert_eq!(out.len(), 1);
        assert!(out[0].is_text());
    }

    #[test]
    fn test_is_unsigned_decimal() {
        assert!(is_unsigned_decimal("0"));
        assert!(is_unsigned_decimal("42"));
        assert!(is_unsigned_decimal("1.5"));
        assert!(is_unsigned_decimal("007.25"));

        assert!(!is_unsigned_decimal(""));
        assert!(!is_unsigned_decimal("."));
        assert!(!is_unsigned_decimal("1."));
        assert!(!is_unsigned_decimal(".5"));
        assert!(!is_unsigned_decimal("-1"));
        assert!(!is_unsigned_decimal("+1"));
        assert!(!is_unsigned_decimal("1e3"));
        assert!(!is_unsigned_decimal("1 "));
    }
}
