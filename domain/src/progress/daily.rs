//! Daily question selection
//!
//! Selection is a pure function of the user, the date and the previously
//! stored record; persisting the returned record is the caller's job.

use super::entities::{DailyQuestionRecord, UserId};
use crate::catalog::QuestionCatalog;
use crate::core::question::Question;
use chrono::NaiveDate;

/// A selected daily question
#[derive(Debug, Clone, PartialEq)]
pub struct DailySelection<'a> {
    pub question: &'a Question,
    pub record: DailyQuestionRecord,
    /// True when `record` differs from the stored one and must be saved
    pub is_new: bool,
}

/// Pick the question a user should see on `date`.
///
/// A stored record for the same date whose question still exists wins.
/// Otherwise the question is chosen by a stable hash of user and date, so
/// the same inputs always give the same question. Returns `None` only for
/// an empty catalog.
pub fn select_daily_question<'a>(
    catalog: &'a QuestionCatalog,
    user_id: UserId,
    date: NaiveDate,
    stored: Option<&DailyQuestionRecord>,
) -> Option<DailySelection<'a>> {
    if let Some(stored) = stored
        && stored.user_id == user_id
        && stored.date == date
        && let Some(question) = catalog.get(&stored.question_id)
    {
        return Some(DailySelection {
            question,
            record: stored.clone(),
            is_new: false,
        });
    }

    if catalog.is_empty() {
        return None;
    }

    let index = (daily_seed(user_id, date) % catalog.len() as u64) as usize;
    let question = catalog.get_index(index)?;

    Some(DailySelection {
        question,
        record: DailyQuestionRecord {
            user_id,
            date,
            question_id: question.id().to_string(),
        },
        is_new: true,
    })
}

// FNV-1a over "<user>:<date>"; fixed constants keep it stable across builds.
fn daily_seed(user_id: UserId, date: NaiveDate) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    format!("{}:{}", user_id, date)
        .bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_same_inputs_same_question() {
        let catalog = QuestionCatalog::builtin();
        let a = select_daily_question(&catalog, UserId(1), date(10), None).unwrap();
        let b = select_daily_question(&catalog, UserId(1), date(10), None).unwrap();
        assert_eq!(a.question.id(), b.question.id());
        assert!(a.is_new);
        assert_eq!(a.record.date, date(10));
        assert_eq!(a.record.user_id, UserId(1));
    }

    #[test]
    fn test_stored_record_for_today_is_reused() {
        let catalog = QuestionCatalog::builtin();
        let stored = DailyQuestionRecord {
            user_id: UserId(1),
            date: date(10),
            question_id: "hr2".to_string(),
        };
        let selection = select_daily_question(&catalog, UserId(1), date(10), Some(&stored)).unwrap();
        assert_eq!(selection.question.id(), "hr2");
        assert!(!selection.is_new);
    }

    #[test]
    fn test_stale_record_is_replaced() {
        let catalog = QuestionCatalog::builtin();
        let stored = DailyQuestionRecord {
            user_id: UserId(1),
            date: date(9),
            question_id: "hr2".to_string(),
        };
        let selection = select_daily_question(&catalog, UserId(1), date(10), Some(&stored)).unwrap();
        assert!(selection.is_new);
        assert_eq!(selection.record.date, date(10));
    }

    #[test]
    fn test_record_for_removed_question_is_replaced() {
        let catalog = QuestionCatalog::builtin();
        let stored = DailyQuestionRecord {
            user_id: UserId(1),
            date: date(10),
            question_id: "gone".to_string(),
        };
        let selection = select_daily_question(&catalog, UserId(1), date(10), Some(&stored)).unwrap();
        assert!(selection.is_new);
        assert!(catalog.get(selection.question.id()).is_some());
    }

    #[test]
    fn test_selection_varies_over_days() {
        let catalog = QuestionCatalog::builtin();
        let ids: std::collections::HashSet<_> = (1..=28)
            .map(|d| {
                select_daily_question(&catalog, UserId(7), date(d), None)
                    .unwrap()
                    .question
                    .id()
                    .to_string()
            })
            .collect();
        assert!(ids.len() > 1);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = QuestionCatalog::empty();
        assert!(select_daily_question(&catalog, UserId(1), date(1), None).is_none());
    }
}
