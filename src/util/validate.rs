//! Client-side form validation rules.
//!
//! These mirror what the backend enforces so most mistakes are caught
//! before a request is made; the 422 path still wins on disagreement.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Username: lowercase letters or digits, 8-12 characters.
pub fn validate_username(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Username is required!");
    }
    let ok = (8..=12).contains(&value.len())
        && value.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if ok {
        Ok(())
    } else {
        Err("Username must be lowercase or numbers, 8-12 characters long")
    }
}

const PASSWORD_SPECIALS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Password: 6-16 characters from letters, digits, and the allowed specials.
pub fn validate_password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Password is required!");
    }
    let ok = (6..=16).contains(&value.len())
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c));
    if ok {
        Ok(())
    } else {
        Err("Password must be 6-16 characters long and include letters, numbers, and special characters")
    }
}

/// Confirmation must match the password exactly.
pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if confirm.is_empty() {
        return Err("Confirm Password is required!");
    }
    if password == confirm {
        Ok(())
    } else {
        Err("Passwords do not match")
    }
}

/// Email: required; shape is left to the backend.
pub fn validate_email(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("Email Address is required!")
    } else {
        Ok(())
    }
}

/// Phone: `+` followed by 11-14 digits.
pub fn validate_phone(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Phone number is required!");
    }
    let mut chars = value.chars();
    let ok = chars.next() == Some('+') && {
        let digits = chars.as_str();
        (11..=14).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
    };
    if ok {
        Ok(())
    } else {
        Err("Phone number must be in the format +12345678901 and 11-14 digits long")
    }
}

/// Full name: required.
pub fn validate_full_name(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("Full name is required!")
    } else {
        Ok(())
    }
}

/// Birthday: optional, but `YYYY-MM-DD` when present.
pub fn validate_birthday(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Ok(());
    }
    let bytes = value.as_bytes();
    let ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit());
    if ok { Ok(()) } else { Err("Invalid date format") }
}

/// Append the midnight time component the backend expects on birthdays.
pub fn normalize_birthday(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(format!("{value} 00:00:00"))
    }
}

/// Posting title: 1-255 characters.
pub fn validate_job_title(value: &str) -> Result<(), &'static str> {
    let len = value.trim().chars().count();
    if (1..=255).contains(&len) {
        Ok(())
    } else {
        Err("Title must be between 1 and 255 characters")
    }
}

/// Posting description: 50-3000 characters.
pub fn validate_job_desc(value: &str) -> Result<(), &'static str> {
    let len = value.trim().chars().count();
    if (50..=3000).contains(&len) {
        Ok(())
    } else {
        Err("Description must be between 50 and 3000 characters")
    }
}

/// Posting skills: at least one selected.
pub fn validate_job_skills(skills: &[i64]) -> Result<(), &'static str> {
    if skills.is_empty() {
        Err("Please select at least one skill")
    } else {
        Ok(())
    }
}

const MAX_UPLOAD_BYTES: f64 = 500.0 * 1024.0 * 1024.0;

/// Resume uploads: PDF only, up to 500 MB.
pub fn validate_resume_file(mime: &str, size_bytes: f64) -> Result<(), &'static str> {
    if mime != "application/pdf" {
        return Err("You can only upload PDF files!");
    }
    if size_bytes >= MAX_UPLOAD_BYTES {
        return Err("File must be smaller than 500MB!");
    }
    Ok(())
}
