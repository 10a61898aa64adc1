//! Name normalization and asset URL derivation.
//!
//! A plant's display name maps to a filename stem shared by its 3D model,
//! AR model and image:
//!
//! ```text
//! "Teak Tree" ─slugify→ "teak-tree" ─stem→ "teak_tree"
//!   → {base}/models/teak_tree.glb
//!   → {base}/models/teak_tree.usdz
//!   → {base}/images/teak_tree.jpg
//! ```

use serde::Serialize;

/// Asset host used when none is configured.
pub const DEFAULT_ASSET_BASE: &str = "http://192.168.43.72:3000";

/// Turn a free-form display name into a lowercase, hyphen-separated token.
///
/// Non-alphanumeric characters become `-`. Runs are collapsed by a single
/// non-overlapping pass of `--` → `-`, so three or more separators in a row
/// leave a residual pair (`"a   b"` → `"a--b"`). Asset filenames on the
/// asset host follow this exact behavior.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else {
            out.push('-');
        }
    }
    out.replace("--", "-").trim_matches('-').to_string()
}

/// The three asset URLs derived from one plant name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetUrls {
    pub model_url: String,
    pub ios_model_url: String,
    pub image_url: String,
}

/// Base URL of the host serving `/models/*` and `/images/*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBase {
    base: String,
}

impl Default for AssetBase {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

impl AssetBase {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Percent-encoded filename stem: slug with `-` replaced by `_`.
    pub fn stem(name: &str) -> String {
        let underscored = slugify(name).replace('-', "_");
        urlencoding::encode(&underscored).into_owned()
    }

    pub fn derive(&self, name: &str) -> AssetUrls {
        let stem = Self::stem(name);
        AssetUrls {
            model_url: format!("{}/models/{}.glb", self.base, stem),
            ios_model_url: format!("{}/models/{}.usdz", self.base, stem),
            image_url: format!("{}/images/{}.jpg", self.base, stem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_empty() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Teak Tree"), "teak-tree");
        assert_eq!(slugify("Neem"), "neem");
        assert_eq!(slugify("Adenium Obesum (I)"), "adenium-obesum-i");
    }

    #[test]
    fn slugify_strips_edges() {
        assert_eq!(slugify("  Pothos Plant!  "), "pothos-plant");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn slugify_double_separator_collapses_once() {
        assert_eq!(slugify("Bael  Tree"), "bael-tree");
        assert_eq!(slugify("Tulsi, Holy"), "tulsi-holy");
    }

    #[test]
    fn slugify_long_runs_leave_residual_hyphens() {
        // "a---b" → one "--" replaced → "a--b"
        assert_eq!(slugify("a   b"), "a--b");
        // "a----b" → two non-overlapping pairs → "a--b"
        assert_eq!(slugify("a    b"), "a--b");
        // "a-----b" → "a---b"
        assert_eq!(slugify("a     b"), "a---b");
    }

    #[test]
    fn slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Gulmohar Ñame"), "gulmohar-ñame");
        assert_eq!(slugify("Tree 42"), "tree-42");
    }

    #[test]
    fn derive_teak_tree() {
        let urls = AssetBase::default().derive("Teak Tree");
        assert_eq!(urls.model_url, "http://192.168.43.72:3000/models/teak_tree.glb");
        assert_eq!(urls.ios_model_url, "http://192.168.43.72:3000/models/teak_tree.usdz");
        assert_eq!(urls.image_url, "http://192.168.43.72:3000/images/teak_tree.jpg");
    }

    #[test]
    fn derive_models_share_stem() {
        let base = AssetBase::new("https://assets.example.com");
        for name in ["Teak Tree", "", "a   b", "Peach (dwarf)", "Ñame"] {
            let urls = base.derive(name);
            let glb = urls.model_url.strip_suffix(".glb").unwrap();
            let usdz = urls.ios_model_url.strip_suffix(".usdz").unwrap();
            assert_eq!(glb, usdz, "stem mismatch for {:?}", name);
        }
    }

    #[test]
    fn derive_is_deterministic() {
        let base = AssetBase::default();
        assert_eq!(base.derive("Coconut Tree"), base.derive("Coconut Tree"));
    }

    #[test]
    fn stem_percent_encodes_non_ascii() {
        assert_eq!(AssetBase::stem("Ñame"), "%C3%B1ame");
        assert_eq!(AssetBase::stem("a   b"), "a__b");
    }

    #[test]
    fn base_trailing_slash_trimmed() {
        let base = AssetBase::new("http://cdn.local/");
        assert_eq!(base.as_str(), "http://cdn.local");
        assert_eq!(base.derive("Neem Tree").image_url, "http://cdn.local/images/neem_tree.jpg");
    }
}
