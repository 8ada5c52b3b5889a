use std::fmt;

/// Identifier for one form field.
///
/// The declaration order is the display order of the form, and `FieldErrors`
/// iterates in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Profession,
    MeetupPlaces,
    Frequency,
    Interests,
    Reason,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Profession,
        Field::MeetupPlaces,
        Field::Frequency,
        Field::Interests,
        Field::Reason,
    ];

    /// Stable snake_case name, matching the `Draft` member names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Profession => "profession",
            Field::MeetupPlaces => "meetup_places",
            Field::Frequency => "frequency",
            Field::Interests => "interests",
            Field::Reason => "reason",
        }
    }

    /// Prompt shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email ✉️",
            Field::Profession => "Profession / What you do 💼",
            Field::MeetupPlaces => "Preferred meetup places 📍",
            Field::Frequency => "How often would you like AI to schedule meetups? ⏰",
            Field::Interests => "Other interests or hobbies 🎨🎮🎵",
            Field::Reason => "Why do you want to join WHERE? 🤔",
        }
    }

    /// Whether the rendered input is visually marked as required.
    ///
    /// Only name and email carry a marker. The validator enforces every
    /// field, so the rendered form under-promises what submission demands;
    /// profession in particular is validated but never marked.
    pub fn marked_required(&self) -> bool {
        matches!(self, Field::Name | Field::Email)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an input event mutates its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Replace the field's text value.
    Text,
    /// Replace the single selected option.
    Radio,
    /// Add (`checked`) or remove the value from the field's set of options.
    Checkbox { checked: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_in_form_order() {
        assert_eq!(Field::ALL.len(), 7);
        assert_eq!(Field::ALL[0], Field::Name);
        assert_eq!(Field::ALL[6], Field::Reason);
    }

    #[test]
    fn only_name_and_email_are_marked_required() {
        assert!(Field::Name.marked_required());
        assert!(Field::Email.marked_required());
        for field in [
            Field::Profession,
            Field::MeetupPlaces,
            Field::Frequency,
            Field::Interests,
            Field::Reason,
        ] {
            assert!(!field.marked_required(), "{field} should carry no marker");
        }
    }
}
