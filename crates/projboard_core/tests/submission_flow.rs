use projboard_core::{
    gather_user_input, Alert, FormFields, MountedBoard, ProjectBoard, SubmissionOutcome,
    UserInput, INVALID_INPUT_MESSAGE,
};
use std::cell::RefCell;

#[derive(Default)]
struct RecordingAlert {
    messages: RefCell<Vec<String>>,
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn mount_board(board: &ProjectBoard) -> MountedBoard<RecordingAlert> {
    board.mount(RecordingAlert::default())
}

fn fill(board: &mut MountedBoard<RecordingAlert>, title: &str, description: &str, people: &str) {
    board.input.set_title(title);
    board.input.set_description(description);
    board.input.set_people(people);
}

#[test]
fn empty_title_is_rejected() {
    let fields = FormFields::new("", "hello world", "3");
    assert_eq!(gather_user_input(&fields), UserInput::Rejected);
}

#[test]
fn four_char_description_is_rejected() {
    let fields = FormFields::new("Build API", "desc", "3");
    assert_eq!(gather_user_input(&fields), UserInput::Rejected);
}

#[test]
fn five_char_description_is_rejected_by_exclusive_bound() {
    let fields = FormFields::new("Build API", "descr", "3");
    assert_eq!(gather_user_input(&fields), UserInput::Rejected);
}

#[test]
fn zero_people_is_rejected() {
    let fields = FormFields::new("Build API", "A full description", "0");
    assert_eq!(gather_user_input(&fields), UserInput::Rejected);
}

#[test]
fn people_bounds_are_exclusive() {
    for people in ["1", "5", ""] {
        let fields = FormFields::new("Build API", "A full description", people);
        assert_eq!(gather_user_input(&fields), UserInput::Rejected, "people={people}");
    }
}

#[test]
fn description_length_counts_utf16_units() {
    // Three emoji are six UTF-16 units, above the exclusive bound of five.
    let fields = FormFields::new("Build API", "😀😀😀", "3");
    assert!(gather_user_input(&fields).is_valid());
}

#[test]
fn people_accepts_hex_literal() {
    let fields = FormFields::new("Build API", "A full description", "0x3");
    match gather_user_input(&fields) {
        UserInput::Valid(draft) => assert_eq!(draft.people, 3),
        UserInput::Rejected => panic!("0x3 should coerce to 3"),
    }
}

#[test]
fn people_rejects_lowercase_infinity() {
    let fields = FormFields::new("Build API", "A full description", "inf");
    assert_eq!(gather_user_input(&fields), UserInput::Rejected);
}

#[test]
fn byte_order_mark_title_is_rejected() {
    let fields = FormFields::new("\u{FEFF}", "A full description", "3");
    assert_eq!(gather_user_input(&fields), UserInput::Rejected);
}

#[test]
fn mounted_boards_share_store_with_later_boards() {
    let board = ProjectBoard::new();
    let mut mounted = mount_board(&board);
    fill(&mut mounted, "Build API", "A full description", "3");
    assert_eq!(mounted.input.submit(), SubmissionOutcome::Accepted);

    assert_eq!(ProjectBoard::new().store().len(), 1);
}

#[test]
fn rejected_submission_alerts_once_and_keeps_inputs() {
    let board = ProjectBoard::new();
    let mut mounted = mount_board(&board);
    fill(&mut mounted, "Build API", "desc", "3");

    let outcome = mounted.input.submit();

    assert_eq!(outcome, SubmissionOutcome::Rejected);
    assert_eq!(
        *mounted.input.alert_sink().messages.borrow(),
        vec![INVALID_INPUT_MESSAGE.to_string()]
    );
    assert_eq!(
        mounted.input.fields(),
        &FormFields::new("Build API", "desc", "3")
    );
    assert!(board.store().is_empty());
    assert!(mounted.active.rendered_items().is_empty());
}

#[test]
fn accepted_submission_adds_project_notifies_lists_and_clears_inputs() {
    let board = ProjectBoard::new();
    let mut mounted = mount_board(&board);
    fill(&mut mounted, "Build API", "A full description", "3");

    let outcome = mounted.input.submit();

    assert_eq!(outcome, SubmissionOutcome::Accepted);
    assert!(mounted.input.alert_sink().messages.borrow().is_empty());
    assert!(mounted.input.fields().is_empty());

    let projects = board.store().projects();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].people, 3);
    assert_eq!(projects[0].description, "A full description");

    assert_eq!(mounted.active.assigned_projects().len(), 1);
    assert_eq!(mounted.active.rendered_items(), vec!["Build API"]);
    assert!(mounted.finished.rendered_items().is_empty());
}

#[test]
fn lists_rerender_full_snapshot_after_each_submission() {
    let board = ProjectBoard::new();
    let mut mounted = mount_board(&board);

    fill(&mut mounted, "Build API", "A full description", "3");
    assert_eq!(mounted.input.submit(), SubmissionOutcome::Accepted);
    fill(&mut mounted, "Write docs", "Document every endpoint", "2");
    assert_eq!(mounted.input.submit(), SubmissionOutcome::Accepted);

    assert_eq!(mounted.active.rendered_items(), vec!["Build API", "Write docs"]);
    assert_eq!(
        mounted.render(),
        "ACTIVE PROJECTS\n- Build API\n- Write docs\n\nFINISHED PROJECTS\n"
    );
}
