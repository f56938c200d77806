// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cached registration surveys and the responses captured from them.
//!
//! The `offline_asv_list` slot maps a survey name to its description and
//! questions. Each answer option carries a selection value that encodes
//! `[answer_id, question_id, survey_id]` as a JSON string, which is what
//! the form hands back when the operator picks it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// One answered survey question, as queued with the patron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SurveyResponse {
    pub survey: i64,
    pub question: i64,
    pub answer: i64,
}

impl SurveyResponse {
    /// Decodes a form selection value.
    ///
    /// An empty value means the question was left unanswered and yields
    /// `None`; unanswered questions are never stored.
    pub fn from_selection(raw: &str) -> Result<Option<Self>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let invalid = |reason: String| Error::InvalidSurveySelection {
            value: raw.to_string(),
            reason,
        };

        let parts: Vec<Value> = serde_json::from_str(raw).map_err(|e| invalid(e.to_string()))?;
        let [answer, question, survey] = parts.as_slice() else {
            return Err(invalid(
                "expected [answer_id, question_id, survey_id]".to_string(),
            ));
        };

        let id = |v: &Value| id_of(v).ok_or_else(|| invalid(format!("'{v}' is not an id")));
        Ok(Some(SurveyResponse {
            survey: id(survey)?,
            question: id(question)?,
            answer: id(answer)?,
        }))
    }
}

fn id_of(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

/// All cached surveys, keyed by survey name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyCatalog(BTreeMap<String, Survey>);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<SurveyQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub question: String,
    #[serde(default)]
    pub answers: Vec<AnswerOption>,
}

/// A selectable answer: display label plus encoded selection value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct AnswerOption {
    pub label: String,
    pub value: String,
}

impl From<(String, String)> for AnswerOption {
    fn from((label, value): (String, String)) -> Self {
        AnswerOption { label, value }
    }
}

impl From<AnswerOption> for (String, String) {
    fn from(option: AnswerOption) -> Self {
        (option.label, option.value)
    }
}

/// A question with its 1-based position across every survey in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct NumberedQuestion<'a> {
    pub number: usize,
    pub survey: &'a str,
    pub question: &'a SurveyQuestion,
}

impl SurveyCatalog {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn surveys(&self) -> impl Iterator<Item = (&str, &Survey)> {
        self.0.iter().map(|(name, survey)| (name.as_str(), survey))
    }

    /// Every question in display order, numbered from 1.
    pub fn questions(&self) -> impl Iterator<Item = NumberedQuestion<'_>> {
        self.surveys()
            .flat_map(|(name, survey)| survey.questions.iter().map(move |q| (name, q)))
            .enumerate()
            .map(|(idx, (survey, question))| NumberedQuestion {
                number: idx + 1,
                survey,
                question,
            })
    }

    pub fn question_count(&self) -> usize {
        self.questions().count()
    }

    /// Returns the selection value for answer `answer_no` of question
    /// `question_no`, both 1-based as listed by [`questions`](Self::questions).
    pub fn selection(&self, question_no: usize, answer_no: usize) -> Result<&str> {
        let invalid = |reason: String| Error::InvalidSurveySelection {
            value: format!("{question_no}={answer_no}"),
            reason,
        };

        let numbered = self
            .questions()
            .find(|q| q.number == question_no)
            .ok_or_else(|| invalid(format!("there is no question {question_no}")))?;
        let option = answer_no
            .checked_sub(1)
            .and_then(|idx| numbered.question.answers.get(idx))
            .ok_or_else(|| {
                invalid(format!(
                    "question {question_no} has no answer {answer_no}"
                ))
            })?;

        Ok(&option.value)
    }

    /// Checks that every answer option decodes to a response.
    pub fn verify(&self) -> Result<()> {
        for numbered in self.questions() {
            for option in &numbered.question.answers {
                SurveyResponse::from_selection(&option.value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "survey_tests.rs"]
mod tests;
