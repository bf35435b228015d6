// Slug derivation for dashboard names

/// Lowercases `name`, keeps letters and digits (any script), and collapses every
/// other run of characters into a single hyphen. Leading and trailing
/// hyphens are trimmed.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Sales Overview"), "sales-overview");
        assert_eq!(slugify("Sales Overview 2024"), "sales-overview-2024");
        assert_eq!(slugify("  Q3: Revenue & Costs!  "), "q3-revenue-costs");
        assert_eq!(slugify("snake_case--name"), "snake-case-name");
    }

    #[test]
    fn test_slugify_is_deterministic() {
        let name = "Marketing / Funnel";
        assert_eq!(slugify(name), slugify(name));
        assert_ne!(slugify("Marketing"), slugify("Finance"));
    }

    #[test]
    fn test_slugify_keeps_unicode_letters() {
        assert_eq!(slugify("売上"), "売上");
        assert_eq!(slugify("Réseau"), "réseau");
        assert_eq!(slugify("R seau"), "r-seau");
        assert_eq!(slugify("Ventes Été 2024"), "ventes-été-2024");
    }

    #[test]
    fn test_slugify_without_alphanumerics() {
        assert_eq!(slugify("!!! ---"), "");
        assert_eq!(slugify(""), "");
    }
}
