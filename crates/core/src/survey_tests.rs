// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::testing::survey_catalog_json;
use yare::parameterized;

fn catalog() -> SurveyCatalog {
    serde_json::from_value(survey_catalog_json()).unwrap()
}

#[test]
fn empty_selection_is_unanswered() {
    assert_eq!(SurveyResponse::from_selection("").unwrap(), None);
    assert_eq!(SurveyResponse::from_selection("   ").unwrap(), None);
}

#[parameterized(
    numbers = { "[42,7,3]" },
    strings = { "[\"42\",\"7\",\"3\"]" },
    spaced = { " [42, 7, 3] " },
)]
fn selection_decodes_answer_question_survey(raw: &str) {
    let response = SurveyResponse::from_selection(raw).unwrap().unwrap();
    assert_eq!(
        response,
        SurveyResponse {
            survey: 3,
            question: 7,
            answer: 42,
        }
    );
}

#[parameterized(
    not_json = { "42" },
    too_short = { "[42,7]" },
    too_long = { "[42,7,3,1]" },
    not_ids = { "[\"a\",7,3]" },
    object = { "{\"answer\":42}" },
)]
fn malformed_selection_is_rejected(raw: &str) {
    let err = SurveyResponse::from_selection(raw).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn catalog_parses_slot_shape() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 1);
    let (name, survey) = catalog.surveys().next().unwrap();
    assert_eq!(name, "Reading Habits");
    assert_eq!(survey.description, "Tell us how you read");
    assert_eq!(survey.questions[1].answers[1].label, "Audio");
    assert_eq!(survey.questions[1].answers[1].value, "[45,8,3]");
}

#[test]
fn questions_are_numbered_across_surveys() {
    let mut value = survey_catalog_json();
    value["Another"] = serde_json::json!({
        "description": "",
        "questions": [{"question": "Q?", "answers": [["Yes", "[50,10,4]"]]}]
    });
    let catalog: SurveyCatalog = serde_json::from_value(value).unwrap();

    let numbers: Vec<(usize, &str)> = catalog.questions().map(|q| (q.number, q.survey)).collect();
    assert_eq!(
        numbers,
        vec![
            (1, "Another"),
            (2, "Reading Habits"),
            (3, "Reading Habits"),
            (4, "Reading Habits"),
        ]
    );
    assert_eq!(catalog.question_count(), 4);
}

#[test]
fn selection_by_number() {
    let catalog = catalog();
    assert_eq!(catalog.selection(1, 1).unwrap(), "[42,7,3]");
    assert_eq!(catalog.selection(2, 2).unwrap(), "[45,8,3]");
}

#[parameterized(
    no_question = { 9, 1 },
    zero_question = { 0, 1 },
    no_answer = { 3, 2 },
    zero_answer = { 1, 0 },
)]
fn selection_out_of_range(question: usize, answer: usize) {
    assert!(catalog().selection(question, answer).is_err());
}

#[test]
fn verify_accepts_well_formed_catalog() {
    assert!(catalog().verify().is_ok());
}

#[test]
fn verify_rejects_undecodable_answer() {
    let value = serde_json::json!({
        "Broken": {"questions": [{"question": "Q?", "answers": [["Yes", "yes"]]}]}
    });
    let catalog: SurveyCatalog = serde_json::from_value(value).unwrap();
    assert!(catalog.verify().is_err());
}
