//! Binding native plugin entry points by name.

use std::path::{Path, PathBuf};

use libloading::Library;

use crate::error::{PluginError, PluginResult};

/// Base name of the plugin library, without platform prefix or extension.
pub const LIBRARY_NAME: &str = "PAMLDLL";

/// Symbol name of the addition entry point.
pub const ADD_SYMBOL: &str = "Add";

/// Calling signature of `Add`.
pub type AddFn = unsafe extern "C" fn(i32, i32) -> i32;

/// Platform file name of the plugin, e.g. `libPAMLDLL.so` on Linux.
pub fn default_library_path() -> PathBuf {
    PathBuf::from(libloading::library_filename(LIBRARY_NAME))
}

/// An opened dynamic library.
pub struct NativeLibrary {
    path: PathBuf,
    library: Library,
}

impl NativeLibrary {
    /// Open the library at `path`.
    pub fn open(path: impl AsRef<Path>) -> PluginResult<Self> {
        let path = path.as_ref().to_path_buf();
        // SAFETY: loading runs the library's initialisers; the plugin is
        // trusted to be a PAMLDLL build.
        let library =
            unsafe { Library::new(&path) }.map_err(|source| PluginError::LibraryNotFound {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "opened native library");
        Ok(Self { path, library })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve `symbol` as a copied function pointer.
    ///
    /// # Safety
    /// - `F` must match the exported function's real signature
    /// - The returned pointer must not be called after this library is dropped
    pub unsafe fn resolve<F: Copy>(&self, symbol: &str) -> PluginResult<F> {
        let bound = self
            .library
            .get::<F>(symbol.as_bytes())
            .map_err(|source| PluginError::MissingEntryPoint {
                symbol: symbol.to_string(),
                source,
            })?;
        Ok(*bound)
    }
}

/// Bound entry points of `PAMLDLL`.
///
/// Holds the library handle (if any) so the function pointers stay valid for
/// as long as the binding lives.
pub struct PamlPlugin {
    add: AddFn,
    library: Option<NativeLibrary>,
}

impl PamlPlugin {
    /// Load the plugin from `path` and bind every entry point.
    pub fn load(path: impl AsRef<Path>) -> PluginResult<Self> {
        let library = NativeLibrary::open(path)?;
        // SAFETY: `Add` is exported as `extern "C" fn(i32, i32) -> i32`, and
        // the library is stored next to the pointer.
        let add = unsafe { library.resolve::<AddFn>(ADD_SYMBOL)? };
        tracing::info!(path = %library.path().display(), "bound {ADD_SYMBOL}");
        Ok(Self {
            add,
            library: Some(library),
        })
    }

    /// Bind to the entry points compiled into this process.
    pub fn linked() -> Self {
        Self {
            add: crate::ffi::Add,
            library: None,
        }
    }

    /// Path of the loaded library, or `None` for a linked binding.
    pub fn library_path(&self) -> Option<&Path> {
        self.library.as_ref().map(NativeLibrary::path)
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        // SAFETY: the pointer was resolved with the matching signature and the
        // library it came from is owned by `self`.
        unsafe { (self.add)(a, b) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_library_path() {
        let name = default_library_path();
        let name = name.to_string_lossy();
        assert!(name.contains(LIBRARY_NAME));
        if cfg!(target_os = "linux") {
            assert_eq!(name, "libPAMLDLL.so");
        }
    }

    #[test]
    fn test_linked_add() {
        let plugin = PamlPlugin::linked();
        assert_eq!(plugin.add(4, 5), 9);
        assert!(plugin.library_path().is_none());
    }

    #[test]
    fn test_load_built_library() {
        let path = crate::tests::built_library_path();
        let plugin = PamlPlugin::load(&path).unwrap();
        assert_eq!(plugin.add(4, 5), 9);
        assert_eq!(plugin.add(i32::MAX, 1), i32::MIN);
        assert_eq!(plugin.library_path(), Some(path.as_path()));
    }

    #[test]
    fn test_resolve_add_by_name() {
        let library = NativeLibrary::open(crate::tests::built_library_path()).unwrap();
        let add = unsafe { library.resolve::<AddFn>(ADD_SYMBOL) }.unwrap();
        assert_eq!(unsafe { add(2, 3) }, 5);
    }

    #[test]
    fn test_missing_entry_point() {
        let library = NativeLibrary::open(crate::tests::built_library_path()).unwrap();
        match unsafe { library.resolve::<AddFn>("Missing") } {
            Err(PluginError::MissingEntryPoint { symbol, .. }) => assert_eq!(symbol, "Missing"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("`Missing` should not resolve"),
        }
    }

    #[test]
    fn test_missing_library() {
        let err = PamlPlugin::load("/nonexistent/libPAMLDLL.so").err().unwrap();
        match err {
            PluginError::LibraryNotFound { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/libPAMLDLL.so"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
