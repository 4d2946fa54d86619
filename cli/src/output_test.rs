use super::*;
use advice::view::{CaseView, HistoryEntryView};

fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
    let mut buf = Vec::new();
    f(&mut buf).expect("write");
    String::from_utf8(buf).expect("utf8")
}

#[test]
fn advice_without_cases_prints_text_only() {
    let view = ResponseView::Advice { text: "Replace the thermostat.\n".to_owned(), cases: Vec::new() };
    let out = render(|buf| write_response(buf, &view));
    assert_eq!(out, "Mechanic's Advice\nReplace the thermostat.\n");
}

#[test]
fn advice_with_cases_lists_each_case() {
    let view = ResponseView::Advice {
        text: "Bleed the brakes.".to_owned(),
        cases: vec![CaseView {
            number: 1,
            problem: "spongy pedal".to_owned(),
            solution_preview: "air in lines".to_owned(),
            match_label: "91% Match".to_owned(),
        }],
    };
    let out = render(|buf| write_response(buf, &view));
    assert!(out.contains("Similar Cases\n  Case 1 (91% Match)\n"));
    assert!(out.contains("    Problem: spongy pedal\n"));
    assert!(out.contains("    Solution: air in lines\n"));
}

#[test]
fn empty_history_prints_placeholder() {
    let out = render(|buf| write_history(buf, &HistoryView::Empty("No diagnostic history found.")));
    assert_eq!(out, "No diagnostic history found.\n");
}

#[test]
fn history_entries_show_index_label_and_previews() {
    let view = HistoryView::Entries(vec![HistoryEntryView {
        index: 0,
        category_label: "ENGINE".to_owned(),
        timestamp: "t1".to_owned(),
        message_preview: "m1".to_owned(),
        response_preview: "r1".to_owned(),
        active: false,
    }]);
    let out = render(|buf| write_history(buf, &view));
    assert_eq!(out, "[0] ENGINE  t1\n    m1\n    r1\n");
}
