use crate::{Field, InputKind};

/// Choices offered for the meetup places checkboxes.
pub const MEETUP_PLACES: [&str; 5] = [
    "Cafes ☕",
    "Outdoors 🌳",
    "Events / workshops 🎟️",
    "Beer 🍺",
    "Other",
];

/// Choices offered for the frequency radio buttons.
pub const FREQUENCIES: [&str; 4] = [
    "Once a week",
    "2–3 times a month",
    "Occasionally / whenever possible",
    "Other",
];

/// The in-progress signup form data.
///
/// Created empty when the form mounts and mutated field-by-field through
/// [`apply`]. It is consumed into a [`crate::Payload`] on submit and is never
/// reset afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub profession: String,
    /// Selected meetup places, in the order they were checked.
    pub meetup_places: Vec<String>,
    /// Selected frequency; empty means no selection yet.
    pub frequency: String,
    pub interests: String,
    pub reason: String,
}

impl Draft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text value of a scalar field. Returns `""` for `MeetupPlaces`, which
    /// holds a set rather than a scalar.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Profession => &self.profession,
            Field::MeetupPlaces => "",
            Field::Frequency => &self.frequency,
            Field::Interests => &self.interests,
            Field::Reason => &self.reason,
        }
    }

    /// Whether a meetup place is currently checked.
    pub fn has_place(&self, place: &str) -> bool {
        self.meetup_places.iter().any(|p| p == place)
    }
}

/// Pure reducer for form input events.
///
/// `Checkbox` input adds or removes `value` from the meetup places set;
/// checking an already-present value or unchecking an absent one is a no-op.
/// `Text` and `Radio` input replaces the scalar value of the field.
pub fn apply(mut draft: Draft, field: Field, value: &str, kind: InputKind) -> Draft {
    match (field, kind) {
        (Field::MeetupPlaces, InputKind::Checkbox { checked }) => {
            if checked {
                if !draft.has_place(value) {
                    draft.meetup_places.push(value.to_string());
                }
            } else {
                draft.meetup_places.retain(|p| p != value);
            }
        }
        // A checkbox event on a scalar field carries no meaning.
        (_, InputKind::Checkbox { .. }) | (Field::MeetupPlaces, _) => {}
        (Field::Name, _) => draft.name = value.to_string(),
        (Field::Email, _) => draft.email = value.to_string(),
        (Field::Profession, _) => draft.profession = value.to_string(),
        (Field::Frequency, _) => draft.frequency = value.to_string(),
        (Field::Interests, _) => draft.interests = value.to_string(),
        (Field::Reason, _) => draft.reason = value.to_string(),
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_replaces_value() {
        let draft = apply(Draft::new(), Field::Name, "Ana", InputKind::Text);
        let draft = apply(draft, Field::Name, "Anabel", InputKind::Text);
        assert_eq!(draft.name, "Anabel");
    }

    #[test]
    fn checkbox_adds_and_removes() {
        let draft = apply(
            Draft::new(),
            Field::MeetupPlaces,
            "Cafes ☕",
            InputKind::Checkbox { checked: true },
        );
        assert!(draft.has_place("Cafes ☕"));

        let draft = apply(
            draft,
            Field::MeetupPlaces,
            "Cafes ☕",
            InputKind::Checkbox { checked: false },
        );
        assert!(draft.meetup_places.is_empty());
    }

    #[test]
    fn toggling_twice_restores_prior_state() {
        let mut draft = Draft::new();
        draft.meetup_places = vec!["Beer 🍺".to_string()];
        let before = draft.clone();

        let draft = apply(
            draft,
            Field::MeetupPlaces,
            "Outdoors 🌳",
            InputKind::Checkbox { checked: true },
        );
        let draft = apply(
            draft,
            Field::MeetupPlaces,
            "Outdoors 🌳",
            InputKind::Checkbox { checked: false },
        );
        assert_eq!(draft, before);
    }

    #[test]
    fn checking_twice_does_not_duplicate() {
        let draft = apply(
            Draft::new(),
            Field::MeetupPlaces,
            "Beer 🍺",
            InputKind::Checkbox { checked: true },
        );
        let draft = apply(
            draft,
            Field::MeetupPlaces,
            "Beer 🍺",
            InputKind::Checkbox { checked: true },
        );
        assert_eq!(draft.meetup_places.len(), 1);
    }

    #[test]
    fn radio_keeps_exactly_one_selection() {
        let draft = apply(Draft::new(), Field::Frequency, FREQUENCIES[0], InputKind::Radio);
        let draft = apply(draft, Field::Frequency, FREQUENCIES[2], InputKind::Radio);
        assert_eq!(draft.frequency, "Occasionally / whenever possible");
    }

    #[test]
    fn checkbox_event_on_scalar_field_is_ignored() {
        let draft = apply(
            Draft::new(),
            Field::Email,
            "x@y.zz",
            InputKind::Checkbox { checked: true },
        );
        assert_eq!(draft, Draft::new());
    }
}
