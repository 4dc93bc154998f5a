use procr_ansi_term::{Color, Style};
use std::fmt;

pub const STYLE_HEADING: Style = Style::new().bold().fg(Color::Purple);
pub const STYLE_LABEL: Style = Style::new().fg(Color::Yellow);
pub const STYLE_ITEM: Style = Style::new().fg(Color::Cyan);

pub const COLOR_GREEN: Color = Color::Fixed(40);
pub const COLOR_BLUE: Color = Color::Fixed(27);
pub const COLOR_ORANGE: Color = Color::Fixed(208);

pub const STYLE_HIGHLIGHT: Style =
    Style::new().underline().bold().fg(COLOR_ORANGE);

pub const STYLE_RECT: Style = Style::new().fg(COLOR_BLUE);

pub const STYLE_QUADRANT: Style = Style::new().fg(COLOR_GREEN);

pub fn debug_with(
    f: impl Fn(&mut fmt::Formatter) -> fmt::Result,
) -> impl fmt::Debug {
    struct DebugWith<F>(F);

    impl<F> fmt::Debug for DebugWith<F>
    where
        F: Fn(&mut fmt::Formatter) -> fmt::Result,
    {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            self.0(f)
        }
    }

    DebugWith(f)
}

pub fn display_with(
    f: impl Fn(&mut fmt::Formatter) -> fmt::Result,
) -> impl fmt::Display {
    struct DisplayWith<F>(F);

    impl<F> fmt::Display for DisplayWith<F>
    where
        F: Fn(&mut fmt::Formatter) -> fmt::Result,
    {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            self.0(f)
        }
    }

    DisplayWith(f)
}

/// Paints `text` with `style` when `styled` is set, otherwise passes it
/// through untouched.
pub fn paint_if(styled: bool, style: Style, text: &str) -> String {
    if styled {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

#[macro_export]
macro_rules! info_label {
    ($label:literal) => {
        $crate::debug::STYLE_LABEL
            .bold()
            .paint(format!("({})", $label))
    };
}

#[macro_export]
macro_rules! item {
    ($label:expr, $item:expr) => {
        format!("{}:{}", $crate::debug::STYLE_LABEL.paint($label), $item)
    };
}

#[macro_export]
macro_rules! item_dbg {
    ($label:expr, $item:expr) => {
        format!("{}:{:?}", $crate::debug::STYLE_LABEL.paint($label), $item)
    };
    ($item:expr) => {
        format!(
            "{}",
            $crate::debug::STYLE_ITEM.paint(format!("{:?}", $item))
        )
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn paint_if_passes_plain_text_through() {
        assert_eq!(paint_if(false, STYLE_HEADING, "Points:"), "Points:");
        let painted = paint_if(true, STYLE_HEADING, "Points:");
        assert!(painted.contains("Points:"));
        assert_ne!(painted, "Points:");
    }

    #[test]
    fn with_wrappers() {
        let dbg = debug_with(|f| f.write_str("dbg"));
        let disp = display_with(|f| write!(f, "{}-{}", 1, 2));
        assert_eq!(format!("{:?}", dbg), "dbg");
        assert_eq!(disp.to_string(), "1-2");
    }

    #[test]
    fn item_macros_keep_content() {
        let s = item!("A", "(2,3)");
        assert!(s.contains('A') && s.ends_with(":(2,3)"));
        let s = item_dbg!((3.0, 2.0));
        assert!(s.contains("(3.0, 2.0)"));
    }
}
