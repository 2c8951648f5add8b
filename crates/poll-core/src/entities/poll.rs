//! Poll aggregate - a question with options, voters, and a lock flag
//!
//! Options and voters are embedded in the poll and have no independent
//! lifecycle. Vote counts are derived state: they are always recomputed
//! from the voter list, never incremented in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// An option within a poll, with its derived vote count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: Snowflake,
    pub text: String,
    pub votes: i64,
}

impl PollOption {
    /// Create a new option with zero votes
    pub fn new(id: Snowflake, text: String) -> Self {
        Self { id, text, votes: 0 }
    }
}

/// A user's current choice within a poll (at most one entry per user)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub user_id: Snowflake,
    pub option_id: Snowflake,
}

/// An option descriptor submitted on update: an existing option (id set)
/// to retitle in place, or a new option (id absent) to append
#[derive(Debug, Clone)]
pub struct OptionUpdate {
    pub id: Option<Snowflake>,
    pub text: String,
}

/// Poll aggregate root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub id: Snowflake,
    pub question: String,
    pub options: Vec<PollOption>,
    pub owner_id: Snowflake,
    pub is_locked: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub voters: Vec<Voter>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Poll {
    /// Create a new poll owned by `owner_id`
    ///
    /// The question and every option text must be non-empty, and at least
    /// one option is required. Fresh option IDs are drawn from `next_id`.
    ///
    /// # Errors
    /// Returns a validation error when the question or option list is invalid
    pub fn create(
        id: Snowflake,
        owner_id: Snowflake,
        question: String,
        option_texts: Vec<String>,
        mut next_id: impl FnMut() -> Snowflake,
    ) -> Result<Self, DomainError> {
        validate_question(&question)?;
        validate_option_texts(option_texts.iter().map(String::as_str))?;

        let now = Utc::now();
        let options = option_texts
            .into_iter()
            .map(|text| PollOption::new(next_id(), text))
            .collect();

        Ok(Self {
            id,
            question,
            options,
            owner_id,
            is_locked: false,
            deleted_at: None,
            voters: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Check whether `user_id` owns this poll
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    /// Check whether the poll has been soft-deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Require that `user_id` is the poll owner
    ///
    /// # Errors
    /// Returns `DomainError::NotPollOwner` otherwise
    pub fn ensure_owner(&self, user_id: Snowflake) -> Result<(), DomainError> {
        if self.is_owned_by(user_id) {
            Ok(())
        } else {
            Err(DomainError::NotPollOwner)
        }
    }

    /// Require that the poll is not locked
    ///
    /// # Errors
    /// Returns `DomainError::PollLocked` otherwise
    pub fn ensure_unlocked(&self) -> Result<(), DomainError> {
        if self.is_locked {
            Err(DomainError::PollLocked)
        } else {
            Ok(())
        }
    }

    /// Replace the question and reconcile the option list
    ///
    /// Submitted options carrying an ID that matches an existing option keep
    /// that option (text updated in place, accumulated votes preserved until
    /// the recompute); submitted options without a matching ID become brand
    /// new options. Options omitted from the submission are dropped, and
    /// votes referencing them fall out of the tally on the recompute. Stale
    /// voter entries are retained in the voter list.
    ///
    /// # Errors
    /// Returns `DomainError::PollLocked` when locked, or a validation error
    /// when the new question or option list is invalid
    pub fn apply_update(
        &mut self,
        question: String,
        submitted: Vec<OptionUpdate>,
        mut next_id: impl FnMut() -> Snowflake,
    ) -> Result<(), DomainError> {
        self.ensure_unlocked()?;
        validate_question(&question)?;
        validate_option_texts(submitted.iter().map(|o| o.text.as_str()))?;

        let mut reconciled = Vec::with_capacity(submitted.len());
        for update in submitted {
            let existing = update
                .id
                .and_then(|id| self.options.iter().find(|o| o.id == id));
            match existing {
                Some(option) => reconciled.push(PollOption {
                    id: option.id,
                    text: update.text,
                    votes: option.votes,
                }),
                None => reconciled.push(PollOption::new(next_id(), update.text)),
            }
        }

        self.question = question;
        self.options = reconciled;
        self.recalculate_votes();
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Record `user_id`'s vote for `option_id`
    ///
    /// A second vote by the same user overwrites their previous choice
    /// rather than adding a second voter entry.
    ///
    /// # Errors
    /// Returns `DomainError::PollLocked` when locked, or
    /// `DomainError::UnknownOption` when the option is not in this poll
    pub fn cast_vote(&mut self, user_id: Snowflake, option_id: Snowflake) -> Result<(), DomainError> {
        self.ensure_unlocked()?;

        if !self.options.iter().any(|o| o.id == option_id) {
            return Err(DomainError::UnknownOption(option_id));
        }

        match self.voters.iter_mut().find(|v| v.user_id == user_id) {
            Some(voter) => voter.option_id = option_id,
            None => self.voters.push(Voter { user_id, option_id }),
        }

        self.recalculate_votes();
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Remove `user_id`'s voter entry if present
    ///
    /// Returns whether an entry was removed. A no-op when the user has not
    /// voted.
    ///
    /// # Errors
    /// Returns `DomainError::PollLocked` when locked
    pub fn clear_vote(&mut self, user_id: Snowflake) -> Result<bool, DomainError> {
        self.ensure_unlocked()?;

        let before = self.voters.len();
        self.voters.retain(|v| v.user_id != user_id);
        let removed = self.voters.len() != before;

        if removed {
            self.recalculate_votes();
            self.updated_at = Utc::now();
        }
        Ok(removed)
    }

    /// Lock the poll; returns whether the flag changed (idempotent)
    pub fn lock(&mut self) -> bool {
        if self.is_locked {
            return false;
        }
        self.is_locked = true;
        self.updated_at = Utc::now();
        true
    }

    /// Unlock the poll; returns whether the flag changed (idempotent)
    pub fn unlock(&mut self) -> bool {
        if !self.is_locked {
            return false;
        }
        self.is_locked = false;
        self.updated_at = Utc::now();
        true
    }

    /// Mark the poll deleted; returns whether the marker changed (idempotent)
    pub fn soft_delete(&mut self) -> bool {
        if self.deleted_at.is_some() {
            return false;
        }
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
        true
    }

    /// Recompute every option's vote count from the voter list
    ///
    /// Resets all counts to zero, then counts one vote per voter whose
    /// chosen option still exists. Voters referencing removed options stay
    /// in the list but contribute nothing to the tally.
    pub fn recalculate_votes(&mut self) {
        for option in &mut self.options {
            option.votes = 0;
        }
        for voter in &self.voters {
            if let Some(option) = self.options.iter_mut().find(|o| o.id == voter.option_id) {
                option.votes += 1;
            }
        }
    }

    /// Sum of all option vote counts
    pub fn total_votes(&self) -> i64 {
        self.options.iter().map(|o| o.votes).sum()
    }

    /// The option `user_id` currently has a vote on, if any
    pub fn voter_choice(&self, user_id: Snowflake) -> Option<Snowflake> {
        self.voters
            .iter()
            .find(|v| v.user_id == user_id)
            .map(|v| v.option_id)
    }
}

fn validate_question(question: &str) -> Result<(), DomainError> {
    if question.trim().is_empty() {
        return Err(DomainError::EmptyQuestion);
    }
    Ok(())
}

fn validate_option_texts<'a>(texts: impl ExactSizeIterator<Item = &'a str>) -> Result<(), DomainError> {
    if texts.len() == 0 {
        return Err(DomainError::NoOptions);
    }
    for text in texts {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyOptionText);
        }
    }
    Ok(())
}
