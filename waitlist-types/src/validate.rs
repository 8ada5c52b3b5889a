use std::sync::LazyLock;

use regex::Regex;

use crate::{Draft, Field, FieldErrors};

// Unanchored on purpose: any "local@domain.tld"-shaped substring passes,
// matching the behavior of the form this validator replaces.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Validate a draft, returning one error message per failing field.
///
/// Pure and synchronous; the draft is valid iff the returned map is empty.
pub fn validate(draft: &Draft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.is_empty() {
        errors.insert(Field::Name, "Name required");
    }
    if draft.email.is_empty() || !EMAIL.is_match(&draft.email) {
        errors.insert(Field::Email, "Valid email required");
    }
    if draft.profession.is_empty() {
        errors.insert(Field::Profession, "Profession required");
    }
    if draft.meetup_places.is_empty() {
        errors.insert(Field::MeetupPlaces, "Select at least one place");
    }
    if draft.frequency.is_empty() {
        errors.insert(Field::Frequency, "Select frequency");
    }
    if draft.interests.is_empty() {
        errors.insert(Field::Interests, "Interests required");
    }
    if draft.reason.is_empty() {
        errors.insert(Field::Reason, "Reason required");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> Draft {
        Draft {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            profession: "Designer".to_string(),
            meetup_places: vec!["Cafes ☕".to_string()],
            frequency: "Once a week".to_string(),
            interests: "art".to_string(),
            reason: "curious".to_string(),
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn empty_draft_fails_every_rule() {
        let errors = validate(&Draft::new());
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get(Field::Name), Some("Name required"));
        assert_eq!(errors.get(Field::Email), Some("Valid email required"));
        assert_eq!(errors.get(Field::Profession), Some("Profession required"));
        assert_eq!(errors.get(Field::MeetupPlaces), Some("Select at least one place"));
        assert_eq!(errors.get(Field::Frequency), Some("Select frequency"));
        assert_eq!(errors.get(Field::Interests), Some("Interests required"));
        assert_eq!(errors.get(Field::Reason), Some("Reason required"));
    }

    #[test]
    fn email_shapes() {
        let mut draft = valid_draft();

        for bad in ["foo", "foo@bar", "@x.com", "a b"] {
            draft.email = bad.to_string();
            assert_eq!(
                validate(&draft).get(Field::Email),
                Some("Valid email required"),
                "{bad:?} should be rejected"
            );
        }

        for good in ["foo@bar.com", "a@b.co"] {
            draft.email = good.to_string();
            assert!(validate(&draft).is_empty(), "{good:?} should pass");
        }
    }

    #[test]
    fn profession_is_required_by_the_validator() {
        // Required here even though the rendered field carries no marker.
        let mut draft = valid_draft();
        draft.profession.clear();
        assert_eq!(validate(&draft).get(Field::Profession), Some("Profession required"));
    }

    #[test]
    fn empty_place_set_is_rejected() {
        let mut draft = valid_draft();
        draft.meetup_places.clear();
        assert_eq!(
            validate(&draft).get(Field::MeetupPlaces),
            Some("Select at least one place")
        );
    }
}
