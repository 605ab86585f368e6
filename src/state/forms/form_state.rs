//! Entry screen form: focus handling, text editing and dropdowns on top of
//! the coordinator

use super::coordinator::FormCoordinator;
use super::field::{FieldKind, FieldName};
use crate::state::CountryDirectory;

/// Inputs in focus order. The dialing code is derived and never focused.
pub const FOCUS_ORDER: [FieldName; 10] = [
    FieldName::FirstName,
    FieldName::LastName,
    FieldName::Username,
    FieldName::Email,
    FieldName::Password,
    FieldName::PhoneNumber,
    FieldName::Country,
    FieldName::City,
    FieldName::PanNumber,
    FieldName::AadharNumber,
];

/// Focus index of the submit button, after the last input
pub const SUBMIT_INDEX: usize = FOCUS_ORDER.len();

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    /// Disabled positions are skipped when cycling
    fn is_focusable(&self, _index: usize) -> bool {
        true
    }
    fn next_field(&mut self) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = (index + 1) % count;
            if self.is_focusable(index) {
                break;
            }
        }
        self.set_active_field(index);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = if index == 0 { count - 1 } else { index - 1 };
            if self.is_focusable(index) {
                break;
            }
        }
        self.set_active_field(index);
    }
}

/// An open dropdown list for a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    pub field: FieldName,
    /// Choices; the first is the empty "Select a …" entry
    pub options: Vec<String>,
    pub selected: usize,
}

impl Dropdown {
    /// Text to show for an option
    pub fn option_label(&self, index: usize) -> &str {
        match self.options.get(index) {
            Some(option) if option.is_empty() => self.field.placeholder(),
            Some(option) => option,
            None => "",
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// The registration entry form
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub coordinator: FormCoordinator,
    pub active_field_index: usize,
    pub show_password: bool,
    pub dropdown: Option<Dropdown>,
}

impl RegistrationForm {
    pub fn new(directory: CountryDirectory) -> Self {
        Self {
            coordinator: FormCoordinator::new(directory),
            active_field_index: 0,
            show_password: false,
            dropdown: None,
        }
    }

    /// The focused input, `None` when the submit button has focus
    pub fn active_field_name(&self) -> Option<FieldName> {
        FOCUS_ORDER.get(self.active_field_index).copied()
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_INDEX
    }

    /// City stays disabled until a country is chosen
    pub fn is_disabled(&self, field: FieldName) -> bool {
        field == FieldName::City && self.coordinator.value(FieldName::Country).is_empty()
    }

    /// Type a character into the focused text input
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_field_name() else {
            return;
        };
        if !matches!(field.kind(), FieldKind::Text | FieldKind::Secret) {
            return;
        }

        let mut value = self.coordinator.value(field).to_string();
        if let Some(max) = field.max_length() {
            if value.chars().count() >= max {
                return;
            }
        }
        value.push(c);
        self.coordinator.update_field(field, value);
    }

    /// Delete the last character of the focused text input
    pub fn backspace(&mut self) {
        let Some(field) = self.active_field_name() else {
            return;
        };
        if !matches!(field.kind(), FieldKind::Text | FieldKind::Secret) {
            return;
        }

        let mut value = self.coordinator.value(field).to_string();
        if value.pop().is_some() {
            self.coordinator.update_field(field, value);
        }
    }

    /// Open the dropdown for the focused select, if it is enabled
    pub fn open_dropdown(&mut self) {
        let Some(field) = self.active_field_name() else {
            return;
        };
        if field.kind() != FieldKind::Select || self.is_disabled(field) {
            return;
        }

        let mut options = vec![String::new()];
        match field {
            FieldName::Country => options.extend(
                self.coordinator
                    .directory()
                    .countries()
                    .map(str::to_string),
            ),
            _ => {
                let country = self.coordinator.value(FieldName::Country);
                options.extend(self.coordinator.available_cities(country).iter().cloned());
            }
        }

        let current = self.coordinator.value(field);
        let selected = options.iter().position(|o| o == current).unwrap_or(0);
        self.dropdown = Some(Dropdown {
            field,
            options,
            selected,
        });
    }

    /// Commit the highlighted dropdown option to its field
    pub fn confirm_dropdown(&mut self) {
        if let Some(dropdown) = self.dropdown.take() {
            let choice = dropdown
                .options
                .get(dropdown.selected)
                .cloned()
                .unwrap_or_default();
            self.coordinator.update_field(dropdown.field, choice);
        }
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = None;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Clear everything for a new session
    pub fn reset(&mut self) {
        self.coordinator.reset();
        self.active_field_index = 0;
        self.show_password = false;
        self.dropdown = None;
    }

    /// Treat the focused input as left, validating it
    pub fn blur_active(&mut self) {
        if let Some(field) = self.active_field_name() {
            let value = self.coordinator.value(field).to_string();
            self.coordinator.touch(field, &value);
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(CountryDirectory::default())
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        SUBMIT_INDEX + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    /// Moving focus away from an input counts as leaving it
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(SUBMIT_INDEX);
        if index != self.active_field_index {
            self.blur_active();
            self.dropdown = None;
        }
        self.active_field_index = index;
    }
    fn is_focusable(&self, index: usize) -> bool {
        FOCUS_ORDER
            .get(index)
            .map_or(true, |field| !self.is_disabled(*field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn focus(form: &mut RegistrationForm, field: FieldName) {
        let index = FOCUS_ORDER.iter().position(|f| *f == field).unwrap();
        form.set_active_field(index);
    }

    fn type_text(form: &mut RegistrationForm, text: &str) {
        for c in text.chars() {
            form.input_char(c);
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_focuses_first_name() {
            let form = RegistrationForm::default();
            assert_eq!(form.active_field_name(), Some(FieldName::FirstName));
            assert!(!form.is_submit_active());
        }

        #[test]
        fn test_leaving_a_field_touches_it() {
            let mut form = RegistrationForm::default();
            form.next_field();
            assert!(form.coordinator.is_touched(FieldName::FirstName));
            assert_eq!(
                form.coordinator.error(FieldName::FirstName),
                Some("First Name is required")
            );
        }

        #[test]
        fn test_city_skipped_without_country() {
            let mut form = RegistrationForm::default();
            focus(&mut form, FieldName::Country);
            form.next_field();
            assert_eq!(form.active_field_name(), Some(FieldName::PanNumber));
            form.prev_field();
            assert_eq!(form.active_field_name(), Some(FieldName::Country));
        }

        #[test]
        fn test_city_reachable_with_country() {
            let mut form = RegistrationForm::default();
            form.coordinator.update_field(FieldName::Country, "Canada");
            focus(&mut form, FieldName::Country);
            form.next_field();
            assert_eq!(form.active_field_name(), Some(FieldName::City));
        }

        #[test]
        fn test_focus_wraps_through_submit() {
            let mut form = RegistrationForm::default();
            form.prev_field();
            assert!(form.is_submit_active());
            assert_eq!(form.active_field_name(), None);
            form.next_field();
            assert_eq!(form.active_field_name(), Some(FieldName::FirstName));
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = RegistrationForm::default();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_INDEX);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_and_backspace() {
            let mut form = RegistrationForm::default();
            type_text(&mut form, "Amitx");
            form.backspace();
            assert_eq!(form.coordinator.value(FieldName::FirstName), "Amit");
        }

        #[test]
        fn test_backspace_on_empty_is_noop() {
            let mut form = RegistrationForm::default();
            form.backspace();
            assert_eq!(form.coordinator.value(FieldName::FirstName), "");
        }

        #[test]
        fn test_pan_input_capped() {
            let mut form = RegistrationForm::default();
            focus(&mut form, FieldName::PanNumber);
            type_text(&mut form, "ABCDE1234FGH");
            assert_eq!(form.coordinator.value(FieldName::PanNumber), "ABCDE1234F");
        }

        #[test]
        fn test_aadhar_input_capped() {
            let mut form = RegistrationForm::default();
            focus(&mut form, FieldName::AadharNumber);
            type_text(&mut form, "1234567890123456");
            assert_eq!(
                form.coordinator.value(FieldName::AadharNumber),
                "123456789012"
            );
        }

        #[test]
        fn test_typing_ignored_on_selects_and_submit() {
            let mut form = RegistrationForm::default();
            focus(&mut form, FieldName::Country);
            form.input_char('x');
            assert_eq!(form.coordinator.value(FieldName::Country), "");

            form.set_active_field(SUBMIT_INDEX);
            form.input_char('x');
            form.backspace();
            assert_eq!(form.coordinator.fields().first_name, "");
        }

        #[test]
        fn test_touched_field_revalidates_while_typing() {
            let mut form = RegistrationForm::default();
            focus(&mut form, FieldName::Email);
            form.next_field();
            assert!(form.coordinator.error(FieldName::Email).is_some());

            focus(&mut form, FieldName::Email);
            type_text(&mut form, "a@b.co");
            assert_eq!(form.coordinator.error(FieldName::Email), None);
        }

        #[test]
        fn test_toggle_password_visibility() {
            let mut form = RegistrationForm::default();
            form.toggle_password_visibility();
            assert!(form.show_password);
            form.toggle_password_visibility();
            assert!(!form.show_password);
        }
    }

    mod dropdown {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_country_dropdown_lists_directory() {
            let mut form = RegistrationForm::default();
            focus(&mut form, FieldName::Country);
            form.open_dropdown();

            let dropdown = form.dropdown.as_ref().unwrap();
            assert_eq!(dropdown.options.len(), 6);
            assert_eq!(dropdown.option_label(0), "Select a country");
            assert_eq!(dropdown.option_label(1), "India");
            assert_eq!(dropdown.selected, 0);
        }

        #[test]
        fn test_choosing_country_sets_code() {
            let mut form = RegistrationForm::default();
            focus(&mut form, FieldName::Country);
            form.open_dropdown();
            if let Some(dropdown) = form.dropdown.as_mut() {
                dropdown.select_next();
            }
            form.confirm_dropdown();

            assert!(form.dropdown.is_none());
            assert_eq!(form.coordinator.value(FieldName::Country), "India");
            assert_eq!(form.coordinator.value(FieldName::CountryCode), "+91");
        }

        #[test]
        fn test_city_dropdown_disabled_without_country() {
            let mut form = RegistrationForm::default();
            form.active_field_index = 7;
            assert_eq!(form.active_field_name(), Some(FieldName::City));
            form.open_dropdown();
            assert!(form.dropdown.is_none());
        }

        #[test]
        fn test_city_dropdown_preselects_current_city() {
            let mut form = RegistrationForm::default();
            form.coordinator.update_field(FieldName::Country, "India");
            form.coordinator.update_field(FieldName::City, "Pune");
            focus(&mut form, FieldName::City);
            form.open_dropdown();

            let dropdown = form.dropdown.as_ref().unwrap();
            assert_eq!(dropdown.option_label(dropdown.selected), "Pune");
        }

        #[test]
        fn test_selection_stays_in_bounds() {
            let mut form = RegistrationForm::default();
            focus(&mut form, FieldName::Country);
            form.open_dropdown();
            let dropdown = form.dropdown.as_mut().unwrap();
            dropdown.select_prev();
            assert_eq!(dropdown.selected, 0);
            for _ in 0..20 {
                dropdown.select_next();
            }
            assert_eq!(dropdown.selected, 5);
        }

        #[test]
        fn test_close_discards_choice() {
            let mut form = RegistrationForm::default();
            focus(&mut form, FieldName::Country);
            form.open_dropdown();
            form.close_dropdown();
            assert_eq!(form.coordinator.value(FieldName::Country), "");
        }

        #[test]
        fn test_dropdown_not_opened_on_text_field() {
            let mut form = RegistrationForm::default();
            form.open_dropdown();
            assert!(form.dropdown.is_none());
        }
    }

    #[test]
    fn test_blur_active_validates_focused_field() {
        let mut form = RegistrationForm::default();
        form.blur_active();
        assert!(form.coordinator.is_touched(FieldName::FirstName));
        assert!(!form.coordinator.is_touched(FieldName::LastName));

        form.set_active_field(SUBMIT_INDEX);
        let touched = form.coordinator.touched().len();
        form.blur_active();
        assert_eq!(form.coordinator.touched().len(), touched);
    }

    #[test]
    fn test_reset_clears_ui_state() {
        let mut form = RegistrationForm::default();
        type_text(&mut form, "Amit");
        form.set_active_field(4);
        form.toggle_password_visibility();
        form.reset();

        assert_eq!(form.active_field_index, 0);
        assert!(!form.show_password);
        assert_eq!(form.coordinator.value(FieldName::FirstName), "");
        assert!(form.coordinator.touched().is_empty());
    }
}
