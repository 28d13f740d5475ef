use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vehicle {
    registration_number: String,
}

impl Vehicle {
    pub fn new(registration_number: impl Into<String>) -> Self {
        Self {
            registration_number: registration_number.into(),
        }
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.registration_number)
    }
}
