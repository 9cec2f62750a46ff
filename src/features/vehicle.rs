//! Vehicle selector form model
//!
//! Holds the make/model/year/VIN selection, filters models by make and
//! validates the form. Errors appear after the first submit attempt and
//! are re-evaluated on every change from then on.

use super::catalog::vehicles;

/// Longest VIN accepted
pub const VIN_MAX_LEN: usize = 17;

/// Form fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Make,
    Model,
    Year,
    Vin,
}

/// A validation failure rendered beside its field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// A search request produced by a successful submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleQuery {
    pub make: String,
    pub model: String,
    pub year: String,
    pub engine: String,
    pub transmission: String,
    pub trim: String,
    pub vin: String,
}

impl VehicleQuery {
    /// Whether this query identifies the vehicle by VIN only
    pub fn is_vin_only(&self) -> bool {
        self.make.is_empty() && self.model.is_empty() && !self.vin.is_empty()
    }

    /// Confirmation shown once the search completes
    pub fn summary(&self) -> String {
        if self.is_vin_only() {
            format!("Searching for VIN {}", self.vin)
        } else {
            format!("Searching for {} {} {}", self.year, self.make, self.model)
        }
    }
}

/// State of the vehicle selector
#[derive(Debug, Clone, Default)]
pub struct VehicleForm {
    make: Option<&'static str>,
    model: Option<&'static str>,
    year: Option<&'static str>,
    engine: Option<&'static str>,
    transmission: Option<&'static str>,
    trim: Option<&'static str>,
    vin: String,
    /// Set by the first submit attempt
    submitted: bool,
    errors: Vec<FieldError>,
    loading: bool,
}

impl VehicleForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make(&self) -> Option<&'static str> {
        self.make
    }

    pub fn model(&self) -> Option<&'static str> {
        self.model
    }

    pub fn year(&self) -> Option<&'static str> {
        self.year
    }

    pub fn engine(&self) -> Option<&'static str> {
        self.engine
    }

    pub fn transmission(&self) -> Option<&'static str> {
        self.transmission
    }

    pub fn trim(&self) -> Option<&'static str> {
        self.trim
    }

    pub fn vin(&self) -> &str {
        &self.vin
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Models offered for the selected make
    pub fn available_models(&self) -> &'static [&'static str] {
        self.make.map(vehicles::models_for).unwrap_or(&[])
    }

    /// Select a make. A model that the new make doesn't offer is cleared.
    pub fn set_make(&mut self, make: &'static str) {
        self.make = Some(make);
        let models = self.available_models();
        if self.model.is_some_and(|model| !models.contains(&model)) {
            self.model = None;
        }
        self.revalidate();
    }

    pub fn set_model(&mut self, model: &'static str) {
        self.model = Some(model);
        self.revalidate();
    }

    pub fn set_year(&mut self, year: &'static str) {
        self.year = Some(year);
        self.revalidate();
    }

    pub fn set_engine(&mut self, engine: &'static str) {
        self.engine = Some(engine);
    }

    pub fn set_transmission(&mut self, transmission: &'static str) {
        self.transmission = Some(transmission);
    }

    pub fn set_trim(&mut self, trim: &'static str) {
        self.trim = Some(trim);
    }

    pub fn set_vin(&mut self, vin: String) {
        self.vin = vin;
        self.revalidate();
    }

    /// Check every rule against the current values
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.make.is_none() {
            errors.push(FieldError::new(Field::Make, "Make is required"));
        }
        if self.model.is_none() {
            errors.push(FieldError::new(Field::Model, "Model is required"));
        }
        if !self.year.is_some_and(|year| year.len() >= 4) {
            errors.push(FieldError::new(Field::Year, "Please select a valid year"));
        }
        if let Some(error) = self.vin_error() {
            errors.push(error);
        }

        errors
    }

    /// Visible error for a field, if any
    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Full search is possible once anything identifying is filled in
    pub fn can_submit(&self) -> bool {
        !self.loading && (self.make.is_some() || self.model.is_some() || !self.vin.is_empty())
    }

    pub fn can_search_vin(&self) -> bool {
        !self.loading && !self.vin.trim().is_empty()
    }

    /// Attempt a full search. On success the form enters the loading state.
    pub fn submit(&mut self) -> Result<VehicleQuery, Vec<FieldError>> {
        self.submitted = true;
        self.errors = self.validate();

        if !self.can_submit() || !self.errors.is_empty() {
            return Err(self.errors.clone());
        }

        self.loading = true;
        Ok(self.query())
    }

    /// Search by VIN alone, bypassing the make/model/year rules
    pub fn submit_vin(&mut self) -> Result<VehicleQuery, FieldError> {
        if let Some(error) = self.vin_error() {
            self.submitted = true;
            self.errors = vec![error];
            return Err(error);
        }
        if !self.can_search_vin() {
            return Err(FieldError::new(Field::Vin, "Enter a VIN to search"));
        }

        self.loading = true;
        Ok(VehicleQuery {
            vin: self.vin.clone(),
            ..VehicleQuery::default()
        })
    }

    /// Leave the loading state after the search completed or failed
    pub fn finish_search(&mut self) {
        self.loading = false;
    }

    /// Clear every field and error. An in-flight search keeps the form
    /// loading until its result arrives.
    pub fn reset(&mut self) {
        *self = Self {
            loading: self.loading,
            ..Self::default()
        };
    }

    /// One-line summary under the submit button
    pub fn status_line(&self) -> String {
        match (self.make, self.model) {
            (Some(make), Some(model)) => {
                format!("Selected: {} {} {}", self.year.unwrap_or(""), make, model)
                    .replace("  ", " ")
            }
            _ if !self.vin.is_empty() => format!("Searching by VIN: {}", self.vin),
            _ => "Fill in required fields (*) or use VIN".to_string(),
        }
    }

    /// "Characters: n/17", shown while a VIN is being typed
    pub fn vin_counter(&self) -> Option<String> {
        if self.vin.is_empty() {
            return None;
        }
        Some(format!(
            "Characters: {}/{}",
            self.vin.chars().count(),
            VIN_MAX_LEN
        ))
    }

    fn vin_error(&self) -> Option<FieldError> {
        (self.vin.chars().count() > VIN_MAX_LEN)
            .then(|| FieldError::new(Field::Vin, "VIN must be 17 characters or less"))
    }

    fn query(&self) -> VehicleQuery {
        let owned = |value: Option<&str>| value.unwrap_or_default().to_string();
        VehicleQuery {
            make: owned(self.make),
            model: owned(self.model),
            year: owned(self.year),
            engine: owned(self.engine),
            transmission: owned(self.transmission),
            trim: owned(self.trim),
            vin: self.vin.clone(),
        }
    }

    fn revalidate(&mut self) {
        if self.submitted {
            self.errors = self.validate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> VehicleForm {
        let mut form = VehicleForm::new();
        form.set_make("Toyota");
        form.set_model("Camry");
        form.set_year("2022");
        form
    }

    #[test]
    fn test_models_follow_make() {
        let mut form = VehicleForm::new();
        assert!(form.available_models().is_empty());

        form.set_make("Honda");
        assert!(form.available_models().contains(&"Civic"));
    }

    #[test]
    fn test_changing_make_clears_foreign_model() {
        let mut form = filled();
        form.set_make("Ford");
        assert_eq!(form.model(), None, "Camry is not a Ford model");
    }

    #[test]
    fn test_reselecting_make_keeps_model() {
        let mut form = filled();
        form.set_make("Toyota");
        assert_eq!(form.model(), Some("Camry"));
    }

    #[test]
    fn test_errors_hidden_until_first_submit() {
        let mut form = VehicleForm::new();
        form.set_vin("X".repeat(18));
        assert!(form.errors().is_empty());

        assert!(form.submit().is_err());
        assert_eq!(form.error_for(Field::Make), Some("Make is required"));
        assert_eq!(form.error_for(Field::Model), Some("Model is required"));
        assert_eq!(form.error_for(Field::Year), Some("Please select a valid year"));
        assert_eq!(
            form.error_for(Field::Vin),
            Some("VIN must be 17 characters or less")
        );
    }

    #[test]
    fn test_errors_update_on_change_after_submit() {
        let mut form = VehicleForm::new();
        form.set_make("BMW");
        assert!(form.submit().is_err());
        assert!(form.error_for(Field::Model).is_some());

        form.set_model("X5");
        assert_eq!(form.error_for(Field::Model), None);
        assert!(form.error_for(Field::Year).is_some());
    }

    #[test]
    fn test_valid_submit_enters_loading() {
        let mut form = filled();
        form.set_trim("XLE");
        let query = form.submit().unwrap();

        assert!(form.is_loading());
        assert!(!form.can_submit(), "no resubmit while loading");
        assert_eq!(query.trim, "XLE");
        assert_eq!(query.summary(), "Searching for 2022 Toyota Camry");

        form.finish_search();
        assert!(form.can_submit());
    }

    #[test]
    fn test_submit_enablement() {
        let mut form = VehicleForm::new();
        assert!(!form.can_submit());
        form.set_vin("1HGCM".to_string());
        assert!(form.can_submit());
    }

    #[test]
    fn test_vin_search_skips_vehicle_rules() {
        let mut form = VehicleForm::new();
        form.set_vin("1HGCM82633A004352".to_string());
        let query = form.submit_vin().unwrap();

        assert!(query.is_vin_only());
        assert_eq!(query.summary(), "Searching for VIN 1HGCM82633A004352");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_vin_search_requires_text() {
        let mut form = VehicleForm::new();
        form.set_vin("   ".to_string());
        assert!(!form.can_search_vin());
        assert!(form.submit_vin().is_err());
        assert!(!form.is_loading());
    }

    #[test]
    fn test_vin_search_rejects_long_vin() {
        let mut form = VehicleForm::new();
        form.set_vin("1HGCM82633A0043521".to_string());
        assert!(form.submit_vin().is_err());
        assert!(form.error_for(Field::Vin).is_some());
    }

    #[test]
    fn test_reset() {
        let mut form = filled();
        form.set_vin("ABC".to_string());
        let _ = form.submit();
        form.reset();

        assert_eq!(form.make(), None);
        assert_eq!(form.vin(), "");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_reset_during_search_keeps_loading() {
        let mut form = filled();
        assert!(form.submit().is_ok());
        form.reset();
        form.set_make("Honda");

        assert!(form.is_loading(), "clearing must not end the pending search");
        assert!(!form.can_submit(), "no second search while one is in flight");
        assert!(form.submit().is_err());

        form.finish_search();
        assert!(!form.is_loading());
        assert!(form.can_submit());
    }

    #[test]
    fn test_reset_when_idle_is_not_loading() {
        let mut form = filled();
        form.reset();
        assert!(!form.is_loading());
    }

    #[test]
    fn test_status_line() {
        let mut form = VehicleForm::new();
        assert_eq!(form.status_line(), "Fill in required fields (*) or use VIN");

        form.set_vin("ABC".to_string());
        assert_eq!(form.status_line(), "Searching by VIN: ABC");

        let form = filled();
        assert_eq!(form.status_line(), "Selected: 2022 Toyota Camry");
    }

    #[test]
    fn test_vin_counter() {
        let mut form = VehicleForm::new();
        assert_eq!(form.vin_counter(), None);
        form.set_vin("ABCDE".to_string());
        assert_eq!(form.vin_counter().as_deref(), Some("Characters: 5/17"));
    }
}
