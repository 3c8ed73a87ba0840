//! The registrar / pending-slot publication protocol.
//!
//! In a generated documentation tree, every implementors artifact ends with the same
//! hand-off: if the browsing UI has already installed its registration callback, the
//! artifact calls it with the freshly built table; otherwise the table is parked in a
//! well-known pending slot for the UI to drain once it initializes. The slot is
//! last-write-wins - a later artifact load overwrites an undrained pending table, and
//! nothing is ever merged.
//!
//! This module implements that protocol as an explicit, owned object instead of an
//! incidental global: [`crate::registry::slot::RegistrySlot`] holds the two-state
//! machine, and [`crate::registry::slot::Registrar`] is the consumer-side callback.
//! Building a table (see [`crate::Artifact::parse`]) and publishing it are separate
//! steps, so both sides are testable without a simulated host environment.

use std::sync::{Arc, Mutex};

use crate::{artifact::ImplementorTable, Result};

/// Consumer-side registration callback.
///
/// A registrar is whatever component renders "who implements this trait" listings.
/// Publication transfers table ownership to it; the slot keeps nothing once a
/// registrar took delivery.
///
/// Any `Fn(ImplementorTable) + Send + Sync` closure is a registrar:
///
/// ```rust
/// use traitdex::{ImplementorTable, RegistrySlot};
///
/// let slot = RegistrySlot::new();
/// slot.install(|table: ImplementorTable| {
///     println!("{} crates registered", table.len());
/// })?;
/// # Ok::<(), traitdex::Error>(())
/// ```
pub trait Registrar: Send + Sync {
    /// Accept a published implementor table.
    ///
    /// # Arguments
    /// * `table` - The table being handed over; the registrar owns it afterwards
    fn register(&self, table: ImplementorTable);
}

impl<F> Registrar for F
where
    F: Fn(ImplementorTable) + Send + Sync,
{
    fn register(&self, table: ImplementorTable) {
        self(table);
    }
}

impl<R> Registrar for Arc<R>
where
    R: Registrar + ?Sized,
{
    fn register(&self, table: ImplementorTable) {
        (**self).register(table);
    }
}

/// Publication state: either a registrar took over, or tables wait in the pending slot.
enum SlotState {
    /// No registrar yet; at most one table parked for later pickup
    Waiting {
        /// The most recently published table, if any (last write wins)
        pending: Option<ImplementorTable>,
    },
    /// A registrar is installed and receives every publish directly
    Installed {
        /// The installed callback
        registrar: Arc<dyn Registrar>,
    },
}

/// The process-wide publication slot, as an explicit owned object.
///
/// `RegistrySlot` is the two-state machine behind artifact publication:
///
/// - **waiting**: [`RegistrySlot::publish`] parks the table in the pending slot,
///   overwriting any previous one. No merging, last write wins.
/// - **installed**: [`RegistrySlot::publish`] synchronously invokes the registrar
///   exactly once with the table. The pending slot is not touched.
///
/// Every publish takes exactly one of the two branches - never both, never neither.
/// [`RegistrySlot::install`] transitions waiting to installed and drains a parked
/// table into the new registrar, so no publish is lost across the transition.
///
/// The slot is thread-safe, but the consistency model stays deliberately simple:
/// concurrent publishes race and the last one wins, exactly like sequential artifact
/// loads overwriting a global.
///
/// # Examples
///
/// ```rust
/// use traitdex::{Artifact, ImplementorTable, RegistrySlot};
///
/// let slot = RegistrySlot::new();
///
/// // Publish before any consumer exists: the table is parked.
/// let table = Artifact::parse(
///     "(function() {var implementors = {};\nimplementors[\"libA\"] = [\"entryA1\",];\n})()",
/// )?;
/// slot.publish(table)?;
/// assert!(!slot.has_registrar()?);
///
/// // The consumer initializes later and drains the slot.
/// slot.install(|table: ImplementorTable| assert_eq!(table.len(), 1))?;
/// assert!(slot.take_pending()?.is_none());
/// # Ok::<(), traitdex::Error>(())
/// ```
pub struct RegistrySlot {
    state: Mutex<SlotState>,
}

impl RegistrySlot {
    /// Create a slot with no registrar and nothing pending.
    #[must_use]
    pub fn new() -> RegistrySlot {
        RegistrySlot {
            state: Mutex::new(SlotState::Waiting { pending: None }),
        }
    }

    /// Publish a table.
    ///
    /// With a registrar installed, the registrar is invoked synchronously, exactly once,
    /// before this method returns; otherwise the table replaces whatever the pending slot
    /// held. The registrar runs outside the slot's internal lock.
    ///
    /// # Arguments
    /// * `table` - The table to hand over; ownership transfers entirely
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the slot's lock is poisoned.
    pub fn publish(&self, table: ImplementorTable) -> Result<()> {
        let registrar = {
            let mut state = self.state.lock().map_err(|_| crate::Error::LockError)?;
            match &mut *state {
                SlotState::Waiting { pending } => {
                    // Last write wins, no merging
                    *pending = Some(table);
                    return Ok(());
                }
                SlotState::Installed { registrar } => Arc::clone(registrar),
            }
        };

        registrar.register(table);
        Ok(())
    }

    /// Install a registrar, draining any pending table into it.
    ///
    /// From here on every publish goes straight to the registrar. Installing over an
    /// existing registrar replaces it, consistent with the slot's last-write-wins model.
    /// The drained table, if any, is delivered outside the slot's internal lock.
    ///
    /// # Arguments
    /// * `registrar` - The consumer callback taking over publication
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the slot's lock is poisoned.
    pub fn install(&self, registrar: impl Registrar + 'static) -> Result<()> {
        let registrar: Arc<dyn Registrar> = Arc::new(registrar);

        let drained = {
            let mut state = self.state.lock().map_err(|_| crate::Error::LockError)?;
            let previous = std::mem::replace(
                &mut *state,
                SlotState::Installed {
                    registrar: Arc::clone(&registrar),
                },
            );

            match previous {
                SlotState::Waiting { pending } => pending,
                SlotState::Installed { .. } => None,
            }
        };

        if let Some(table) = drained {
            registrar.register(table);
        }

        Ok(())
    }

    /// Remove and return the pending table, if any.
    ///
    /// For consumers that poll the slot instead of installing a registrar.
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the slot's lock is poisoned.
    pub fn take_pending(&self) -> Result<Option<ImplementorTable>> {
        let mut state = self.state.lock().map_err(|_| crate::Error::LockError)?;
        match &mut *state {
            SlotState::Waiting { pending } => Ok(pending.take()),
            SlotState::Installed { .. } => Ok(None),
        }
    }

    /// A copy of the pending table without draining the slot.
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the slot's lock is poisoned.
    pub fn pending_snapshot(&self) -> Result<Option<ImplementorTable>> {
        let state = self.state.lock().map_err(|_| crate::Error::LockError)?;
        match &*state {
            SlotState::Waiting { pending } => Ok(pending.clone()),
            SlotState::Installed { .. } => Ok(None),
        }
    }

    /// Returns true if a registrar is installed.
    ///
    /// # Errors
    /// Returns [`crate::Error::LockError`] if the slot's lock is poisoned.
    pub fn has_registrar(&self) -> Result<bool> {
        let state = self.state.lock().map_err(|_| crate::Error::LockError)?;
        Ok(matches!(&*state, SlotState::Installed { .. }))
    }
}

impl Default for RegistrySlot {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RegistrySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state.lock() {
            Ok(guard) => match &*guard {
                SlotState::Waiting { pending: None } => "waiting",
                SlotState::Waiting { pending: Some(_) } => "waiting (pending table)",
                SlotState::Installed { .. } => "installed",
            },
            Err(_) => "poisoned",
        };

        f.debug_struct("RegistrySlot").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::sample_table;
    use std::sync::Mutex as StdMutex;

    fn collector() -> (Arc<StdMutex<Vec<ImplementorTable>>>, impl Registrar + 'static) {
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let registrar = move |table: ImplementorTable| sink.lock().unwrap().push(table);

        (seen, registrar)
    }

    #[test]
    fn publish_while_waiting_parks_table() {
        let slot = RegistrySlot::new();
        slot.publish(sample_table()).unwrap();

        assert!(!slot.has_registrar().unwrap());
        assert_eq!(slot.pending_snapshot().unwrap().unwrap(), sample_table());
        assert_eq!(slot.take_pending().unwrap().unwrap(), sample_table());
        assert!(slot.take_pending().unwrap().is_none());
    }

    #[test]
    fn second_publish_overwrites_pending() {
        let slot = RegistrySlot::new();
        slot.publish(sample_table()).unwrap();

        let mut second = ImplementorTable::new();
        second.insert("libZ", vec!["entryZ1".into()]);
        slot.publish(second.clone()).unwrap();

        // Overwrite, not merge: nothing from the first table survives
        let observed = slot.take_pending().unwrap().unwrap();
        assert_eq!(observed, second);
        assert!(!observed.contains_key("luminance"));
    }

    #[test]
    fn publish_with_registrar_delivers_exactly_once() {
        let slot = RegistrySlot::new();
        let (seen, registrar) = collector();
        slot.install(registrar).unwrap();

        slot.publish(sample_table()).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], sample_table());
        // The registrar path never touches the pending slot
        drop(seen);
        assert!(slot.take_pending().unwrap().is_none());
        assert!(slot.pending_snapshot().unwrap().is_none());
    }

    #[test]
    fn install_drains_pending_into_registrar() {
        let slot = RegistrySlot::new();
        slot.publish(sample_table()).unwrap();

        let (seen, registrar) = collector();
        slot.install(registrar).unwrap();

        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(slot.take_pending().unwrap().is_none());

        // Later publishes flow through directly
        slot.publish(sample_table()).unwrap();
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn install_without_pending_delivers_nothing() {
        let slot = RegistrySlot::new();
        let (seen, registrar) = collector();
        slot.install(registrar).unwrap();

        assert!(seen.lock().unwrap().is_empty());
        assert!(slot.has_registrar().unwrap());
    }

    #[test]
    fn reinstall_replaces_registrar() {
        let slot = RegistrySlot::new();
        let (first_seen, first) = collector();
        let (second_seen, second) = collector();

        slot.install(first).unwrap();
        slot.install(second).unwrap();
        slot.publish(sample_table()).unwrap();

        assert!(first_seen.lock().unwrap().is_empty());
        assert_eq!(second_seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn pending_table_shares_entry_storage() {
        let table = sample_table();
        let published_entry = table.get("luminance").unwrap()[0].clone();

        let slot = RegistrySlot::new();
        slot.publish(table).unwrap();

        let pending = slot.take_pending().unwrap().unwrap();
        let parked_entry = &pending.get("luminance").unwrap()[0];
        assert!(parked_entry.shares_storage(&published_entry));
    }

    #[test]
    fn slot_is_shareable_across_threads() {
        let slot = Arc::new(RegistrySlot::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let slot = Arc::clone(&slot);
                std::thread::spawn(move || {
                    let mut table = ImplementorTable::new();
                    table.insert(format!("lib{i}"), vec!["entry".into()]);
                    slot.publish(table).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Exactly one publish survived, whole-table
        let observed = slot.take_pending().unwrap().unwrap();
        assert_eq!(observed.len(), 1);
    }
}
