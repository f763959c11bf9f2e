mod common;

use common::{Reply, ScriptedPrompter};
use lin::error::Error;
use lin::questions::{collect_answers, questions, AnswerSet, QuestionKind, PREPROCESSOR};
use serde_json::json;

#[test]
fn test_question_order() {
    let ids: Vec<&str> = questions().iter().map(|q| q.id).collect();
    assert_eq!(ids, ["name", "description", "author", "cssStyle", "preprocessor"]);
}

#[test]
fn test_preprocessor_choices() {
    let questions = questions();
    let preprocessor = questions.iter().find(|q| q.id == PREPROCESSOR).unwrap();
    assert_eq!(
        preprocessor.kind,
        QuestionKind::SingleChoice(vec!["less".to_string(), "sass".to_string()])
    );
}

#[test]
fn test_preprocessor_visibility() {
    let questions = questions();
    let preprocessor = questions.iter().find(|q| q.id == PREPROCESSOR).unwrap();

    let with_css: AnswerSet = [("cssStyle", json!(true))].into_iter().collect();
    let without_css: AnswerSet = [("cssStyle", json!(false))].into_iter().collect();

    assert!(preprocessor.is_visible(&with_css));
    assert!(!preprocessor.is_visible(&without_css));
    assert!(!preprocessor.is_visible(&AnswerSet::new()));
}

#[test]
fn test_collect_with_preprocessor() {
    let prompt = ScriptedPrompter::new(vec![
        Reply::Text("shop"),
        Reply::Text("d"),
        Reply::Text("a"),
        Reply::Yes(true),
        Reply::Choice(1),
    ]);

    let answers = collect_answers(&prompt, &questions()).unwrap();

    assert_eq!(answers.len(), 5);
    assert_eq!(answers.get_str("name"), Some("shop"));
    assert_eq!(answers.get_bool("cssStyle"), Some(true));
    assert_eq!(answers.get_str("preprocessor"), Some("sass"));
    assert_eq!(
        answers.ids().collect::<Vec<_>>(),
        ["name", "description", "author", "cssStyle", "preprocessor"]
    );
}

#[test]
fn test_preprocessor_not_asked_without_css() {
    let prompt = ScriptedPrompter::new(vec![
        Reply::Text("shop"),
        Reply::Text(""),
        Reply::Text(""),
        Reply::Yes(false),
    ]);

    let answers = collect_answers(&prompt, &questions()).unwrap();

    assert_eq!(prompt.asked.borrow().len(), 4);
    assert!(!answers.contains(PREPROCESSOR));
    assert_eq!(answers.get_str("description"), Some(""));
}

#[test]
fn test_abort_stops_collection() {
    let prompt = ScriptedPrompter::new(vec![Reply::Text("shop"), Reply::Abort]);

    let result = collect_answers(&prompt, &questions());

    assert!(matches!(result, Err(Error::PromptError(_))));
    assert_eq!(prompt.asked.borrow().len(), 2);
}
