//! Plain-text rendering of the shared view model.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use std::io::{self, Write};

use advice::view::{HistoryView, ResponseView};

pub fn write_response(out: &mut impl Write, response: &ResponseView) -> io::Result<()> {
    match response {
        ResponseView::Placeholder(text) => writeln!(out, "{text}"),
        ResponseView::Advice { text, cases } => {
            writeln!(out, "Mechanic's Advice")?;
            writeln!(out, "{}", text.trim_end())?;
            if cases.is_empty() {
                return Ok(());
            }
            writeln!(out)?;
            writeln!(out, "Similar Cases")?;
            for case in cases {
                writeln!(out, "  Case {} ({})", case.number, case.match_label)?;
                writeln!(out, "    Problem: {}", case.problem)?;
                writeln!(out, "    Solution: {}", case.solution_preview)?;
            }
            Ok(())
        }
    }
}

pub fn write_history(out: &mut impl Write, history: &HistoryView) -> io::Result<()> {
    match history {
        HistoryView::Empty(text) => writeln!(out, "{text}"),
        HistoryView::Entries(entries) => {
            for entry in entries {
                writeln!(out, "[{}] {}  {}", entry.index, entry.category_label, entry.timestamp)?;
                writeln!(out, "    {}", entry.message_preview)?;
                writeln!(out, "    {}", entry.response_preview)?;
            }
            Ok(())
        }
    }
}
