//! Line command parsing for headless mode
//!
//! ```text
//! tier <all|high|mid|low>      os <all|android|ios>      mode <normal|high_perf>
//! page <n>   next   prev       compare <row>   clear
//! category <1-4|id>            scroll <cols>             tab <overview|details>
//! snapshot   quit
//! ```
//!
//! `compare` takes a 1-based row on the current page.

use devperf_app::message::Message;
use devperf_app::state::Tab;
use devperf_core::prelude::*;
use devperf_core::{MetricCategory, ModeFilter, OsFilter, TierFilter};

/// A parsed stdin command
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessCommand {
    /// Feed a message through the update function
    Dispatch(Message),
    /// Emit a snapshot event of the current state
    Snapshot,
}

/// Parse one stdin line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<HeadlessCommand>> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(Error::invalid_command(line, "too many arguments"));
    }

    let invalid = |reason: &str| Error::invalid_command(line.trim(), reason);
    let required = |what: &str| arg.ok_or_else(|| invalid(&format!("missing {}", what)));

    let message = match verb.to_ascii_lowercase().as_str() {
        "tier" => {
            let value = required("tier")?;
            Message::SetTierFilter(
                TierFilter::parse(value).ok_or_else(|| invalid("expected all|high|mid|low"))?,
            )
        }
        "os" => {
            let value = required("os")?;
            Message::SetOsFilter(
                OsFilter::parse(value).ok_or_else(|| invalid("expected all|android|ios"))?,
            )
        }
        "mode" => {
            let value = required("mode")?;
            Message::SetModeFilter(
                ModeFilter::parse(value).ok_or_else(|| invalid("expected normal|high_perf"))?,
            )
        }
        "page" => {
            let value = required("page number")?;
            let page = value
                .parse::<usize>()
                .ok()
                .filter(|page| *page >= 1)
                .ok_or_else(|| invalid("page must be a positive integer"))?;
            Message::GoToPage(page)
        }
        "next" => no_arg(arg, Message::NextPage, &invalid)?,
        "prev" => no_arg(arg, Message::PrevPage, &invalid)?,
        "compare" => {
            let value = required("row")?;
            let row = value
                .parse::<usize>()
                .ok()
                .filter(|row| *row >= 1)
                .ok_or_else(|| invalid("row must be 1 or greater"))?;
            Message::CompareRow(row - 1)
        }
        "clear" => no_arg(arg, Message::ClearSelection, &invalid)?,
        "category" => {
            let value = required("category")?;
            let category = match value.parse::<usize>() {
                Ok(n) if n >= 1 => MetricCategory::from_index(n - 1),
                Ok(_) => None,
                Err(_) => MetricCategory::from_id(value),
            };
            Message::SelectCategory(category.ok_or_else(|| {
                invalid("expected 1-4 or startup|runtime|network|compatibility")
            })?)
        }
        "scroll" => {
            let value = required("column delta")?;
            let delta = value
                .parse::<i32>()
                .map_err(|_| invalid("column delta must be an integer"))?;
            Message::CarouselScrollBy(delta)
        }
        "tab" => {
            let value = required("tab")?;
            Message::SwitchTab(Tab::parse(value).ok_or_else(|| invalid("expected overview|details"))?)
        }
        "snapshot" => {
            if arg.is_some() {
                return Err(invalid("takes no arguments"));
            }
            return Ok(Some(HeadlessCommand::Snapshot));
        }
        "q" | "quit" => no_arg(arg, Message::Quit, &invalid)?,
        _ => return Err(invalid("unknown command")),
    };

    Ok(Some(HeadlessCommand::Dispatch(message)))
}

fn no_arg(arg: Option<&str>, message: Message, invalid: &dyn Fn(&str) -> Error) -> Result<Message> {
    match arg {
        Some(_) => Err(invalid("takes no arguments")),
        None => Ok(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(line: &str) -> Message {
        match parse_command(line) {
            Ok(Some(HeadlessCommand::Dispatch(message))) => message,
            other => panic!("expected dispatch for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_filter_commands() {
        assert_eq!(dispatch("tier high"), Message::SetTierFilter(TierFilter::High));
        assert_eq!(dispatch("TIER Low"), Message::SetTierFilter(TierFilter::Low));
        assert_eq!(dispatch("os ios"), Message::SetOsFilter(OsFilter::Ios));
        assert_eq!(dispatch("mode normal"), Message::SetModeFilter(ModeFilter::Normal));
    }

    #[test]
    fn test_pagination_commands() {
        assert_eq!(dispatch("page 2"), Message::GoToPage(2));
        assert_eq!(dispatch("next"), Message::NextPage);
        assert_eq!(dispatch("prev"), Message::PrevPage);
    }

    #[test]
    fn test_page_zero_is_rejected() {
        match parse_command("page 0") {
            Err(Error::InvalidCommand { reason, .. }) => {
                assert_eq!(reason, "page must be a positive integer")
            }
            other => panic!("expected InvalidCommand, got {:?}", other),
        }
        assert!(parse_command("page -1").is_err());
    }

    #[test]
    fn test_compare_is_one_based() {
        assert_eq!(dispatch("compare 1"), Message::CompareRow(0));
        assert_eq!(dispatch("compare 10"), Message::CompareRow(9));
        assert!(parse_command("compare 0").is_err());
        assert!(parse_command("compare").is_err());
    }

    #[test]
    fn test_category_by_number_or_id() {
        assert_eq!(dispatch("category 3"), Message::SelectCategory(MetricCategory::Network));
        assert_eq!(
            dispatch("category compatibility"),
            Message::SelectCategory(MetricCategory::Compatibility)
        );
        assert!(parse_command("category 5").is_err());
        assert!(parse_command("category 0").is_err());
    }

    #[test]
    fn test_scroll_accepts_negative_delta() {
        assert_eq!(dispatch("scroll -40"), Message::CarouselScrollBy(-40));
        assert!(parse_command("scroll left").is_err());
    }

    #[test]
    fn test_tab_snapshot_and_quit() {
        assert_eq!(dispatch("tab overview"), Message::SwitchTab(Tab::Overview));
        assert_eq!(dispatch("quit"), Message::Quit);
        assert_eq!(dispatch("q"), Message::Quit);
        assert_eq!(
            parse_command("snapshot").expect("valid"),
            Some(HeadlessCommand::Snapshot)
        );
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_command("").expect("valid"), None);
        assert_eq!(parse_command("   ").expect("valid"), None);
    }

    #[test]
    fn test_invalid_commands() {
        for line in ["reload", "tier ultra", "page abc", "next 2", "tier high extra"] {
            match parse_command(line) {
                Err(Error::InvalidCommand { input, .. }) => assert_eq!(input, line),
                other => panic!("expected InvalidCommand for {:?}, got {:?}", line, other),
            }
        }
    }
}
