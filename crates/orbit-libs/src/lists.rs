//! Known library names and classification.

use std::collections::HashSet;

/// Debug builds of the third-party libraries the runtime ships with.
pub const DEBUG_DLLS: &[&str] = &[
    "Iex_d.dll",
    "IlmThread_d.dll",
    "MaterialXCore_d.dll",
    "MaterialXFormat_d.dll",
    "MaterialXGenGlsl_d.dll",
    "MaterialXGenMdl_d.dll",
    "MaterialXGenOsl_d.dll",
    "MaterialXGenShader_d.dll",
    "MaterialXRenderGlsl_d.dll",
    "MaterialXRenderHw_d.dll",
    "MaterialXRenderOsl_d.dll",
    "MaterialXRender_d.dll",
    "OpenEXRCore_d.dll",
    "OpenEXRUtil_d.dll",
    "OpenEXR_d.dll",
    "OpenImageIO_Util_d.dll",
    "OpenImageIO_d.dll",
    "imath_d.dll",
    "libgmpxx_d.dll",
    "openvdb_d.dll",
    "pyshellext_d.dll",
    "python310_d.dll",
    "python3_d.dll",
    "shaderc_shared_d.dll",
    "sqlite3_d.dll",
    "tbb_debug.dll",
    "tbbmalloc_debug.dll",
    "tbbmalloc_proxy_debug.dll",
    "usd_ms_d.dll",
    "sycl6d.dll",
    "OpenColorIO_d_2_2.dll",
    "openvdb.dll",
    "boost_thread-vc142-mt-gyd-x64-1_80.dll",
    "tbb.dll",
    "epoxy-0.dll",
    "SDL2.dll",
];

/// Optimized builds of the third-party libraries the runtime ships with.
pub const OPTIMIZED_DLLS: &[&str] = &[
    "epoxy-0.dll",
    "SDL2.dll",
    "OpenColorIO_2_2.dll",
    "openvdb.dll",
    "imath.dll",
    "boost_thread-vc142-mt-x64-1_80.dll",
    "OpenImageIO_Util.dll",
    "OpenImageIO.dll",
    "tbb.dll",
    "OpenEXRCore.dll",
    "OpenEXRUtil.dll",
    "OpenEXR.dll",
    "Iex.dll",
    "IlmThread.dll",
];

/// Which configurations a library belongs to. A name can be in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub debug: bool,
    pub optimized: bool,
}

impl Classification {
    /// Returns true if the library belongs to neither configuration.
    #[must_use]
    pub fn is_unknown(self) -> bool {
        !self.debug && !self.optimized
    }
}

/// The two name lists libraries are matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryLists {
    debug: HashSet<String>,
    optimized: HashSet<String>,
}

impl Default for LibraryLists {
    fn default() -> Self {
        Self::new(DEBUG_DLLS.iter().copied(), OPTIMIZED_DLLS.iter().copied())
    }
}

impl LibraryLists {
    /// Creates lists from explicit names.
    pub fn new<'a>(
        debug: impl IntoIterator<Item = &'a str>,
        optimized: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            debug: debug.into_iter().map(str::to_string).collect(),
            optimized: optimized.into_iter().map(str::to_string).collect(),
        }
    }

    /// Classifies a file basename. Matching is exact and case-sensitive.
    #[must_use]
    pub fn classify(&self, file_name: &str) -> Classification {
        Classification {
            debug: self.debug.contains(file_name),
            optimized: self.optimized.contains(file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_only() {
        let lists = LibraryLists::default();
        let c = lists.classify("OpenEXR_d.dll");
        assert!(c.debug);
        assert!(!c.optimized);
    }

    #[test]
    fn test_optimized_only() {
        let c = LibraryLists::default().classify("OpenImageIO.dll");
        assert_eq!(
            c,
            Classification {
                debug: false,
                optimized: true
            }
        );
    }

    #[test]
    fn test_shared_names_are_in_both() {
        let lists = LibraryLists::default();
        for name in ["SDL2.dll", "epoxy-0.dll", "openvdb.dll", "tbb.dll"] {
            let c = lists.classify(name);
            assert!(c.debug && c.optimized, "{name}");
        }
    }

    #[test]
    fn test_unknown_and_case_sensitive() {
        let lists = LibraryLists::default();
        assert!(lists.classify("kernel32.dll").is_unknown());
        assert!(lists.classify("sdl2.dll").is_unknown());
    }
}
