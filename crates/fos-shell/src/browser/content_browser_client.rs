//! Shell Content Browser Client
//!
//! The shell's single browser-process policy object. Constructing it
//! registers it as the process-wide client; dropping it unregisters it.

use std::sync::{Arc, Mutex, OnceLock, PoisonError, Weak};

use fos_content::{
    same_context, BrowserContext, BrowserMainParts, ChildProcessId, CommandLine,
    ContentBrowserClient, ContentError, ContentUrl, FileDescriptorInfo, MainFunctionParams,
    ProtocolHandlerMap, QuotaPermissionContext, RequestContextGetter, RequestInterceptors,
    BLOB_SCHEME, DATA_SCHEME, FILESYSTEM_SCHEME, FILE_SCHEME,
};

use super::{
    platform_child_process_files, ChildProcessFiles, ShellBrowserContext, ShellBrowserMainParts,
    ShellQuotaPermissionContext,
};
use crate::ShellConfig;

/// Schemes served inside the engine rather than by the network stack
const HANDLED_SCHEMES: [&str; 4] = [BLOB_SCHEME, FILESYSTEM_SCHEME, DATA_SCHEME, FILE_SCHEME];

/// Name for downloads that carry none
const DEFAULT_DOWNLOAD_NAME: &str = "download";

/// The live client, if any
static INSTANCE: Mutex<Weak<ShellContentBrowserClient>> = Mutex::new(Weak::new());

/// Browser-process policy of the shell
#[derive(Debug)]
pub struct ShellContentBrowserClient {
    config: ShellConfig,
    browser_main_parts: OnceLock<Arc<ShellBrowserMainParts>>,
    child_process_files: Vec<Box<dyn ChildProcessFiles>>,
}

impl ShellContentBrowserClient {
    /// Create and register the client with this build's child process files.
    ///
    /// # Panics
    /// If another client is still alive in this process.
    pub fn new(config: ShellConfig) -> Arc<Self> {
        let child_process_files = platform_child_process_files(&config);
        Self::with_child_process_files(config, child_process_files)
    }

    /// Create and register the client with explicit child process files.
    ///
    /// # Panics
    /// If another client is still alive in this process.
    pub fn with_child_process_files(
        config: ShellConfig,
        child_process_files: Vec<Box<dyn ChildProcessFiles>>,
    ) -> Arc<Self> {
        let client = Arc::new(Self {
            config,
            browser_main_parts: OnceLock::new(),
            child_process_files,
        });

        let mut instance = INSTANCE.lock().unwrap_or_else(PoisonError::into_inner);
        let already_live = instance.strong_count() > 0;
        if !already_live {
            *instance = Arc::downgrade(&client);
        }
        drop(instance);

        assert!(!already_live, "a ShellContentBrowserClient is already registered in this process");
        tracing::debug!(
            providers = client.child_process_files.len(),
            "Registered content browser client"
        );
        client
    }

    /// The live client.
    ///
    /// # Panics
    /// If no client exists.
    pub fn get() -> Arc<Self> {
        let instance = INSTANCE.lock().unwrap_or_else(PoisonError::into_inner).upgrade();
        match instance {
            Some(client) => client,
            None => panic!("ShellContentBrowserClient::get() called with no live client"),
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Main parts, once the engine has asked for them
    pub fn browser_main_parts(&self) -> Option<&Arc<ShellBrowserMainParts>> {
        self.browser_main_parts.get()
    }

    fn main_parts(&self) -> &ShellBrowserMainParts {
        match self.browser_main_parts.get() {
            Some(parts) => parts,
            None => panic!("browser context requested before browser main parts were created"),
        }
    }

    /// Persistent browser context
    pub fn browser_context(&self) -> &ShellBrowserContext {
        self.main_parts().browser_context()
    }

    /// In-memory browser context
    pub fn off_the_record_browser_context(&self) -> &ShellBrowserContext {
        self.main_parts().off_the_record_browser_context()
    }

    /// Map an engine context handle to the shell context it is.
    ///
    /// # Panics
    /// If the handle is neither of the shell's two contexts.
    pub fn shell_browser_context_for(
        &self,
        browser_context: &dyn BrowserContext,
    ) -> &ShellBrowserContext {
        let primary = self.browser_context();
        if same_context(browser_context, primary) {
            return primary;
        }

        let off_the_record = self.off_the_record_browser_context();
        assert!(
            same_context(browser_context, off_the_record),
            "unknown browser context {browser_context:?}"
        );
        off_the_record
    }
}

impl Drop for ShellContentBrowserClient {
    fn drop(&mut self) {
        let mut instance = INSTANCE.lock().unwrap_or_else(PoisonError::into_inner);
        if std::ptr::eq(instance.as_ptr(), self as *const Self) {
            *instance = Weak::new();
        }
    }
}

impl ContentBrowserClient for ShellContentBrowserClient {
    fn create_browser_main_parts(
        &self,
        parameters: MainFunctionParams,
    ) -> Arc<dyn BrowserMainParts> {
        let main_parts = Arc::new(ShellBrowserMainParts::new(parameters, &self.config));
        if self.browser_main_parts.set(Arc::clone(&main_parts)).is_err() {
            panic!("browser main parts created twice");
        }
        tracing::info!("fOS Shell {} main parts created", crate::VERSION);
        main_parts
    }

    fn create_request_context(
        &self,
        browser_context: &dyn BrowserContext,
        protocol_handlers: ProtocolHandlerMap,
        request_interceptors: RequestInterceptors,
    ) -> Arc<dyn RequestContextGetter> {
        self.shell_browser_context_for(browser_context)
            .create_request_context(protocol_handlers, request_interceptors)
    }

    fn is_handled_url(&self, url: &ContentUrl) -> bool {
        match url.scheme() {
            Some(scheme) => HANDLED_SCHEMES.contains(&scheme),
            None => false,
        }
    }

    fn append_extra_command_line_switches(
        &self,
        command_line: &mut CommandLine,
        child_process_id: ChildProcessId,
    ) {
        for files in &self.child_process_files {
            files.append_switches(command_line);
        }
        tracing::debug!(%child_process_id, %command_line, "Child command line");
    }

    fn default_download_name(&self) -> String {
        DEFAULT_DOWNLOAD_NAME.to_string()
    }

    fn get_additional_mapped_files_for_child_process(
        &self,
        command_line: &CommandLine,
        child_process_id: ChildProcessId,
        mappings: &mut FileDescriptorInfo,
    ) -> Result<(), ContentError> {
        for files in &self.child_process_files {
            if let Err(err) = files.map_files(command_line, mappings) {
                tracing::error!(%child_process_id, error = %err, "Cannot launch child process");
                return Err(err);
            }
        }
        tracing::debug!(%child_process_id, mapped = mappings.len(), "Mapped child process files");
        Ok(())
    }

    fn create_quota_permission_context(&self) -> Option<Arc<dyn QuotaPermissionContext>> {
        Some(Arc::new(ShellQuotaPermissionContext::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::MutexGuard;

    use fos_content::{
        switches, QuotaPermissionResponse, StorageQuotaParams, StorageType, INVALID_FD,
        STARTUP_NATIVES_DATA_DESCRIPTOR, STARTUP_SNAPSHOT_DATA_DESCRIPTOR,
    };

    use crate::browser::{PackedResourceFile, StartupDataFds, StartupDataFiles, StartupDataOpener};

    /// Clients are process-wide, so tests creating one run one at a time
    fn serial() -> MutexGuard<'static, ()> {
        static LOCK: Mutex<()> = Mutex::new(());
        LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[derive(Debug, Clone, Default)]
    struct SharedCounter(Arc<AtomicUsize>);

    impl SharedCounter {
        fn get(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[derive(Debug)]
    struct CountingOpener(SharedCounter);

    impl StartupDataOpener for CountingOpener {
        fn open(&self) -> io::Result<StartupDataFds> {
            (self.0).0.fetch_add(1, Ordering::SeqCst);
            Ok(StartupDataFds {
                natives: tempfile::tempfile()?.into(),
                snapshot: tempfile::tempfile()?.into(),
            })
        }
    }

    fn test_config() -> ShellConfig {
        ShellConfig {
            data_path: PathBuf::from("/nonexistent/fos-shell-test"),
            ..ShellConfig::default()
        }
    }

    fn client_with_counter() -> (Arc<ShellContentBrowserClient>, SharedCounter) {
        let counter = SharedCounter::default();
        let files: Vec<Box<dyn ChildProcessFiles>> =
            vec![Box::new(StartupDataFiles::new(CountingOpener(counter.clone())))];
        (ShellContentBrowserClient::with_child_process_files(test_config(), files), counter)
    }

    fn client_with_main_parts() -> Arc<ShellContentBrowserClient> {
        let client = ShellContentBrowserClient::with_child_process_files(test_config(), Vec::new());
        client.create_browser_main_parts(MainFunctionParams::default());
        client
    }

    #[test]
    fn test_get_returns_live_client() {
        let _guard = serial();
        let client = ShellContentBrowserClient::with_child_process_files(test_config(), Vec::new());

        assert!(Arc::ptr_eq(&ShellContentBrowserClient::get(), &client));
    }

    #[test]
    fn test_client_unregisters_on_drop() {
        let _guard = serial();
        let first = ShellContentBrowserClient::with_child_process_files(test_config(), Vec::new());
        drop(first);

        let second = ShellContentBrowserClient::with_child_process_files(test_config(), Vec::new());
        assert!(Arc::ptr_eq(&ShellContentBrowserClient::get(), &second));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_second_client_is_fatal() {
        let _guard = serial();
        let _first =
            ShellContentBrowserClient::with_child_process_files(test_config(), Vec::new());
        let _second =
            ShellContentBrowserClient::with_child_process_files(test_config(), Vec::new());
    }

    #[test]
    #[should_panic(expected = "no live client")]
    fn test_get_without_client_is_fatal() {
        let _guard = serial();
        ShellContentBrowserClient::get();
    }

    #[test]
    fn test_is_handled_url() {
        let _guard = serial();
        let (client, _) = client_with_counter();

        for spec in [
            "blob:https://example.com/550e8400-e29b-41d4-a716-446655440000",
            "filesystem:https://example.com/temporary/file.txt",
            "data:text/plain,hello",
            "file:///tmp/index.html",
        ] {
            assert!(client.is_handled_url(&ContentUrl::parse(spec)), "{spec}");
        }

        for spec in [
            "http://example.com",
            "https://example.com",
            "ws://example.com/socket",
            "fos://settings",
        ] {
            assert!(!client.is_handled_url(&ContentUrl::parse(spec)), "{spec}");
        }

        // invalid URLs are rejected whatever their scheme text looks like
        for spec in ["", "file", "blob", "data", "://data", "http://"] {
            let url = ContentUrl::parse(spec);
            assert!(!url.is_valid(), "{spec:?}");
            assert!(!client.is_handled_url(&url), "{spec:?}");
        }
    }

    #[test]
    fn test_default_download_name() {
        let _guard = serial();
        let (client, _) = client_with_counter();
        assert_eq!(client.default_download_name(), "download");
    }

    #[test]
    fn test_resolves_both_contexts() {
        let _guard = serial();
        let client = client_with_main_parts();

        let primary: &dyn BrowserContext = client.browser_context();
        let off_the_record: &dyn BrowserContext = client.off_the_record_browser_context();

        assert!(!client.shell_browser_context_for(primary).is_off_the_record());
        assert!(client.shell_browser_context_for(off_the_record).is_off_the_record());
    }

    #[test]
    #[should_panic(expected = "unknown browser context")]
    fn test_foreign_context_is_fatal() {
        let _guard = serial();
        let client = client_with_main_parts();
        let stranger = ShellBrowserContext::new(false, PathBuf::from("/tmp/other"), String::new());

        client.shell_browser_context_for(&stranger);
    }

    #[test]
    #[should_panic(expected = "before browser main parts")]
    fn test_context_before_main_parts_is_fatal() {
        let _guard = serial();
        let (client, _) = client_with_counter();
        client.browser_context();
    }

    #[test]
    #[should_panic(expected = "created twice")]
    fn test_main_parts_created_twice_is_fatal() {
        let _guard = serial();
        let client = client_with_main_parts();
        client.create_browser_main_parts(MainFunctionParams::default());
    }

    #[test]
    fn test_request_context_per_browser_context() {
        let _guard = serial();
        let client = client_with_main_parts();

        let persistent = client.create_request_context(
            client.browser_context(),
            ProtocolHandlerMap::new(),
            Vec::new(),
        );
        let in_memory = client.create_request_context(
            client.off_the_record_browser_context(),
            ProtocolHandlerMap::new(),
            Vec::new(),
        );

        assert_eq!(persistent.storage_path(), Some(Path::new("/nonexistent/fos-shell-test")));
        assert_eq!(in_memory.storage_path(), None);
        assert!(client.browser_context().request_context_getter().is_some());
    }

    #[test]
    fn test_mapped_files_open_once() {
        let _guard = serial();
        let (client, opens) = client_with_counter();
        let child = CommandLine::from_args(["fos-shell", "--type=renderer"]);

        let mut first = FileDescriptorInfo::new();
        client
            .get_additional_mapped_files_for_child_process(
                &child,
                ChildProcessId::new(1),
                &mut first,
            )
            .unwrap();
        let mut second = FileDescriptorInfo::new();
        client
            .get_additional_mapped_files_for_child_process(
                &child,
                ChildProcessId::new(2),
                &mut second,
            )
            .unwrap();

        assert_eq!(opens.get(), 1);
        for key in [STARTUP_NATIVES_DATA_DESCRIPTOR, STARTUP_SNAPSHOT_DATA_DESCRIPTOR] {
            assert!(first.get(key).is_some_and(|fd| fd != INVALID_FD));
            assert_eq!(first.get(key), second.get(key));
        }
    }

    #[test]
    fn test_mapped_files_fail_on_missing_pak() {
        let _guard = serial();
        let files: Vec<Box<dyn ChildProcessFiles>> = vec![Box::new(PackedResourceFile::new(None))];
        let client = ShellContentBrowserClient::with_child_process_files(test_config(), files);

        let mut mappings = FileDescriptorInfo::new();
        let result = client.get_additional_mapped_files_for_child_process(
            &CommandLine::from_args(["fos-shell", "--type=renderer"]),
            ChildProcessId::new(3),
            &mut mappings,
        );

        assert!(matches!(result, Err(ContentError::PathUnavailable(_))));
    }

    #[test]
    fn test_extra_switches_depend_on_role() {
        let _guard = serial();
        let (client, _) = client_with_counter();

        let mut renderer = CommandLine::from_args(["fos-shell", "--type=renderer"]);
        client.append_extra_command_line_switches(&mut renderer, ChildProcessId::new(1));
        let argv = renderer.argv();
        for switch in [
            switches::STARTUP_NATIVES_PASSED_BY_FD,
            switches::STARTUP_SNAPSHOT_PASSED_BY_FD,
        ] {
            let flag = format!("--{switch}");
            assert_eq!(argv.iter().filter(|a| **a == flag).count(), 1);
        }

        let mut zygote = CommandLine::from_args(["fos-shell", "--type=zygote"]);
        client.append_extra_command_line_switches(&mut zygote, ChildProcessId::new(2));
        assert_eq!(zygote.argv(), vec!["fos-shell".to_string(), "--type=zygote".to_string()]);
    }

    #[test]
    fn test_no_startup_data_switches_without_providers() {
        let _guard = serial();
        let client = ShellContentBrowserClient::with_child_process_files(test_config(), Vec::new());

        let mut renderer = CommandLine::from_args(["fos-shell", "--type=renderer"]);
        client.append_extra_command_line_switches(&mut renderer, ChildProcessId::new(1));

        assert!(!renderer.has_switch(switches::STARTUP_NATIVES_PASSED_BY_FD));
    }

    #[test]
    fn test_quota_context_disallows() {
        let _guard = serial();
        let (client, _) = client_with_counter();
        let quota = client.create_quota_permission_context().unwrap();
        let (tx, rx) = std::sync::mpsc::channel();

        let params = StorageQuotaParams {
            origin_url: url::Url::parse("https://example.com").unwrap(),
            storage_type: StorageType::Persistent,
            requested_size: 1 << 30,
            user_gesture: true,
        };
        quota.request_quota_permission(
            &params,
            ChildProcessId::new(4),
            Box::new(move |r| tx.send(r).unwrap()),
        );

        assert_eq!(rx.try_recv().unwrap(), QuotaPermissionResponse::Disallow);
    }
}
