use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn input_location_valid(location: &str) -> bool {
        !location.is_empty() && Path::new(location).is_file()
    }

    /// A step may reuse its own identifier; any other occurrence is a clash.
    pub fn identifier_valid(occurs_count: usize, identifier: &str, previous: &str) -> bool {
        occurs_count == 0 || (occurs_count == 1 && identifier == previous)
    }
}
