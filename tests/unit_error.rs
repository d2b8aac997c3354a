/// Unit tests for DiError and DiResult.

use scrutineer::{DiError, DiResult};
use std::error::Error;

#[test]
fn not_found_display() {
    let error = DiError::NotFound("TestService");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Service not found: TestService");
    assert!(display_str.contains("TestService"));
    assert!(display_str.contains("not found"));
}

#[test]
fn type_mismatch_display() {
    let error = DiError::TypeMismatch("std::string::String");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Type mismatch for: std::string::String");
    assert!(display_str.contains("mismatch"));
}

#[test]
fn works_as_a_boxed_error() {
    let error: Box<dyn Error> = Box::new(DiError::NotFound("Database"));
    assert!(error.to_string().contains("Database"));
    assert!(error.source().is_none());
}

#[test]
fn errors_are_cloneable_and_debuggable() {
    let error = DiError::TypeMismatch("u32");
    let cloned = error.clone();
    assert_eq!(format!("{:?}", error), format!("{:?}", cloned));
    assert!(format!("{:?}", error).contains("TypeMismatch"));
}

#[test]
fn di_result_propagates_with_question_mark() {
    fn find(registered: bool) -> DiResult<&'static str> {
        if !registered {
            return Err(DiError::NotFound("Widget"));
        }
        Ok("widget")
    }

    fn use_it(registered: bool) -> DiResult<String> {
        let name = find(registered)?;
        Ok(name.to_uppercase())
    }

    assert_eq!(use_it(true).unwrap(), "WIDGET");
    assert!(matches!(use_it(false), Err(DiError::NotFound("Widget"))));
}
