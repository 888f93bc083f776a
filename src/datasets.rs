use std::path::Path;

use strum::{Display, EnumIter};

// the two benchmark logs the timing harness produces.
// all file names are fixed, there is deliberately no way to configure them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Dataset {
    Scalar,
    Vector,
}

impl Dataset {
    pub fn input_path(&self) -> &'static Path {
        Path::new(match self {
            Self::Scalar => "seal_scalar_benchmark_log.csv",
            Self::Vector => "seal_benchmark_log.csv",
        })
    }

    pub fn plot_path(&self) -> &'static Path {
        Path::new(match self {
            Self::Scalar => "scalar_benchmark_results.png",
            Self::Vector => "vector_benchmark_results.png",
        })
    }

    pub fn preview_path(&self) -> &'static Path {
        Path::new(match self {
            Self::Scalar => "scalar_benchmark_results.html",
            Self::Vector => "vector_benchmark_results.html",
        })
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Scalar => "Scalar Homomorphic Operations Benchmark",
            Self::Vector => "Vector Homomorphic Operations Benchmark",
        }
    }

    /// Readable legend label for an operation name from this dataset.
    ///
    /// Scalar logs tag every operation with a `_Scalar` marker that is
    /// stripped before underscores become spaces. Vector logs carry no
    /// marker, so only the underscores are replaced. Operation names
    /// without marker or underscores pass through unchanged.
    pub fn op_type(&self, operation: &str) -> String {
        let cleaned = match self {
            Self::Scalar => operation.replace("_Scalar", ""),
            Self::Vector => operation.to_owned(),
        };

        cleaned.replace('_', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn scalar_labels_strip_marker_and_underscores() {
        let dataset = Dataset::Scalar;

        assert_eq!(dataset.op_type("Add_Scalar"), "Add");
        assert_eq!(dataset.op_type("Multiply_Scalar"), "Multiply");
        assert_eq!(dataset.op_type("Cipher+Cipher_Mul_Scalar"), "Cipher+Cipher Mul");
        assert_eq!(dataset.op_type("Cipher+Plain_Add_Scalar"), "Cipher+Plain Add");
    }

    #[test]
    fn vector_labels_only_replace_underscores() {
        let dataset = Dataset::Vector;

        assert_eq!(dataset.op_type("Ciphertext_Add"), "Ciphertext Add");
        assert_eq!(dataset.op_type("Ciphertext_Multiply"), "Ciphertext Multiply");
        // the scalar marker is not special for vector logs
        assert_eq!(dataset.op_type("Add_Scalar"), "Add Scalar");
    }

    #[test]
    fn labels_without_separators_pass_through() {
        for dataset in Dataset::iter() {
            assert_eq!(dataset.op_type("Rotate"), "Rotate");
        }
    }
}
