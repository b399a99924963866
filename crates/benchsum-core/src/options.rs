// Dweve benchsum - Benchmark log summarizer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Options controlling a summary run.

use crate::transform::{HardwareProfile, Transformation};

/// Category every other category is divided by when normalizing.
pub const DEFAULT_BASELINE: &str = "BLAS";

/// Options for building a metric table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOptions {
    /// Transformation applied to every accepted sample (default: runtime).
    pub transformation: Transformation,
    /// Divide every category by the baseline category and keep only
    /// single-thread samples (default: false).
    pub normalize: bool,
    /// Baseline category label for normalization (default: "BLAS").
    pub baseline: String,
    /// Peak constants for percent-of-peak transformations.
    pub hardware: HardwareProfile,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            transformation: Transformation::Runtime,
            normalize: false,
            baseline: DEFAULT_BASELINE.to_string(),
            hardware: HardwareProfile::default(),
        }
    }
}

impl SummaryOptions {
    /// Options for `transformation` with every other field at its default.
    pub fn for_transformation(transformation: Transformation) -> Self {
        Self {
            transformation,
            ..Self::default()
        }
    }

    /// Enable normalization against the default baseline.
    pub fn normalized(mut self) -> Self {
        self.normalize = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = SummaryOptions::default();
        assert_eq!(opts.transformation, Transformation::Runtime);
        assert!(!opts.normalize);
        assert_eq!(opts.baseline, "BLAS");
    }

    #[test]
    fn test_builders() {
        let opts = SummaryOptions::for_transformation(Transformation::Mflops).normalized();
        assert_eq!(opts.transformation, Transformation::Mflops);
        assert!(opts.normalize);
    }
}
