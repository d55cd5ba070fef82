//! Rendering surface abstraction.
//!
//! The engine never touches a document tree directly. Everything the load
//! sequence needs from the embedding surface — container lookup, sizing,
//! attaching the annotated document, installing style content — goes
//! through the [`MapHost`] trait, so the engine can be driven against a
//! browser bridge, a server-side renderer or the in-crate mock alike.

/// Opaque handle to a container element, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerHandle(u64);

impl ContainerHandle {
    /// Wraps a host-assigned raw handle.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// Reference to the container element that will receive the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerRef {
    /// Look the element up by id. A leading `#` is tolerated and
    /// stripped, since callers usually mean an id selector by it.
    ById(String),
    /// An already-resolved element handle.
    ByHandle(ContainerHandle),
}

/// The embedding surface the map is rendered into.
pub trait MapHost: Send + Sync {
    /// Looks up a container element by id. The id arrives with any
    /// leading `#` already stripped.
    fn container_by_id(&self, id: &str) -> Option<ContainerHandle>;

    /// Applies explicit pixel dimensions to the container. Unset
    /// dimensions are left alone.
    fn set_container_size(&self, container: ContainerHandle, width: Option<u32>, height: Option<u32>);

    /// Toggles the loading marker on the container while a data source
    /// fetch is in flight.
    fn set_loading(&self, container: ContainerHandle, loading: bool);

    /// Attaches an annotated map document under the container.
    fn attach_document(&self, container: ContainerHandle, svg: &str);

    /// Replaces the active style content with `css`.
    fn install_styles(&self, css: &str);
}

/// A recording host for tests.
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// One observed host interaction, in call order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum HostEvent {
        /// `set_container_size` was called.
        ContainerSized {
            /// Requested width.
            width: Option<u32>,
            /// Requested height.
            height: Option<u32>,
        },
        /// `set_loading` was called.
        Loading(bool),
        /// `attach_document` was called with this payload.
        DocumentAttached(String),
        /// `install_styles` was called with this content.
        StylesInstalled(String),
    }

    /// A mock host that records every interaction.
    #[derive(Debug, Default)]
    pub struct MockHost {
        containers: HashMap<String, ContainerHandle>,
        events: Mutex<Vec<HostEvent>>,
    }

    impl MockHost {
        /// Creates a mock host with no known containers.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers a container id, returning the host for chaining.
        #[must_use]
        pub fn with_container(mut self, id: impl Into<String>, raw: u64) -> Self {
            self.containers.insert(id.into(), ContainerHandle::new(raw));
            self
        }

        /// Every recorded interaction, in call order.
        pub fn events(&self) -> Vec<HostEvent> {
            self.events.lock().unwrap().clone()
        }

        /// Style contents passed to `install_styles`, in call order.
        pub fn installed_styles(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    HostEvent::StylesInstalled(css) => Some(css),
                    _ => None,
                })
                .collect()
        }

        /// Documents passed to `attach_document`, in call order.
        pub fn attached_documents(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    HostEvent::DocumentAttached(svg) => Some(svg),
                    _ => None,
                })
                .collect()
        }

        /// Loading marker toggles, in call order.
        pub fn loading_events(&self) -> Vec<bool> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    HostEvent::Loading(loading) => Some(loading),
                    _ => None,
                })
                .collect()
        }

        fn record(&self, event: HostEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl MapHost for MockHost {
        fn container_by_id(&self, id: &str) -> Option<ContainerHandle> {
            self.containers.get(id).copied()
        }

        fn set_container_size(
            &self,
            _container: ContainerHandle,
            width: Option<u32>,
            height: Option<u32>,
        ) {
            self.record(HostEvent::ContainerSized { width, height });
        }

        fn set_loading(&self, _container: ContainerHandle, loading: bool) {
            self.record(HostEvent::Loading(loading));
        }

        fn attach_document(&self, _container: ContainerHandle, svg: &str) {
            self.record(HostEvent::DocumentAttached(svg.to_string()));
        }

        fn install_styles(&self, css: &str) {
            self.record(HostEvent::StylesInstalled(css.to_string()));
        }
    }
}
