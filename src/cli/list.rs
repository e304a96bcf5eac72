use crate::algorithm::{Algorithm, KeyKind};

/// Table of supported algorithms and what their keys look like
pub fn list_algorithms() -> String {
    let mut output = String::new();
    output.push_str("Supported Algorithms\n");
    output.push_str("====================\n\n");

    for algorithm in Algorithm::ALL {
        let kind = match algorithm.key_kind() {
            KeyKind::Integer => "integer",
            KeyKind::Letters => "letters",
        };
        output.push_str(&format!(
            "  {:<14} {:<8} {}\n",
            algorithm.name(),
            kind,
            algorithm.key_description()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_algorithm() {
        let table = list_algorithms();
        for algorithm in Algorithm::ALL {
            assert!(table.contains(algorithm.name()));
        }
        assert!(table.contains("integer shift, taken modulo 26"));
    }
}
