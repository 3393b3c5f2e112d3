use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use game_content::ItemLoader;
use game_core::{ItemDefinition, ItemId, Player, PlayerStatus};
use runtime::{
    CatalogItemFactory, DeliveryError, FilePlayerRepository, InMemoryPlayerDirectory,
    InMemoryPlayerRepo, ItemFactory, PlayerDirectory, PlayerRepository, Postmaster,
    RepositoryError, Residency,
};
use tempfile::TempDir;

// ============================================================================
// Recording collaborators
// ============================================================================

/// Wraps an in-memory repository and counts calls.
#[derive(Default)]
struct RecordingRepo {
    inner: InMemoryPlayerRepo,
    loads: AtomicUsize,
    saves: AtomicUsize,
    fail_saves: bool,
    /// Scribble on the record, then fail with an I/O error.
    fail_loads: bool,
}

impl RecordingRepo {
    fn with_players(players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            inner: InMemoryPlayerRepo::with_players(players).unwrap(),
            ..Self::default()
        }
    }

    fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn stored(&self, name: &str) -> Player {
        let mut record = Player::default();
        assert!(self.inner.load_by_name(name, &mut record).unwrap());
        record
    }
}

impl PlayerRepository for RecordingRepo {
    fn load_by_name(&self, name: &str, record: &mut Player) -> runtime::repository::Result<bool> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_loads {
            record.name = format!("half-loaded {name}");
            return Err(RepositoryError::Io(std::io::Error::other("disk unplugged")));
        }
        self.inner.load_by_name(name, record)
    }

    fn save(&self, player: &Player) -> runtime::repository::Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves {
            return Err(RepositoryError::Io(std::io::Error::other("read-only")));
        }
        self.inner.save(player)
    }

    fn exists(&self, name: &str) -> bool {
        self.inner.exists(name)
    }

    fn delete(&self, name: &str) -> runtime::repository::Result<()> {
        self.inner.delete(name)
    }
}

/// Wraps a catalog factory and counts create calls.
struct RecordingFactory {
    inner: CatalogItemFactory,
    creates: AtomicUsize,
}

impl RecordingFactory {
    fn new() -> Self {
        Self {
            inner: CatalogItemFactory::from_definitions([
                ItemDefinition::new(ItemId(7), "Gold Coin", 100),
                ItemDefinition::new(ItemId(42), "Short Sword", 1),
            ]),
            creates: AtomicUsize::new(0),
        }
    }

    fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

impl ItemFactory for RecordingFactory {
    fn create(&self, id: ItemId) -> Option<game_core::Item> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(id)
    }
}

struct World {
    directory: Arc<InMemoryPlayerDirectory>,
    repo: Arc<RecordingRepo>,
    items: Arc<RecordingFactory>,
    postmaster: Postmaster,
}

fn world(repo: RecordingRepo) -> World {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let directory = Arc::new(InMemoryPlayerDirectory::new());
    let repo = Arc::new(repo);
    let items = Arc::new(RecordingFactory::new());
    let postmaster = Postmaster::builder()
        .directory(directory.clone())
        .repository(repo.clone())
        .items(items.clone())
        .build()
        .expect("all collaborators set");

    World {
        directory,
        repo,
        items,
        postmaster,
    }
}

// ============================================================================
// Scenarios
// ============================================================================

/// Alice is resident: the item lands in her inbox, nothing is saved and her
/// record is not released.
#[test]
fn test_resident_recipient_is_never_released() {
    let w = world(RecordingRepo::default());
    let alice = w.directory.login(Player::new("Alice")).unwrap();
    let refs_before = Arc::strong_count(&alice);

    let delivery = w.postmaster.add_item_to_recipient("Alice", ItemId(42)).unwrap();

    assert_eq!(delivery.recipient, "Alice");
    assert_eq!(delivery.residency, Residency::Resident);
    assert!(!delivery.persisted);

    assert_eq!(Arc::strong_count(&alice), refs_before);
    assert_eq!(alice.read().unwrap().inbox.count_of(ItemId(42)), 1);
    assert!(w.directory.find_loaded("alice").is_some());

    let metrics = w.postmaster.metrics().snapshot();
    assert_eq!(metrics.records_allocated, 0);
    assert_eq!(metrics.records_released, 0);
    assert_eq!(w.repo.loads(), 0);
    assert_eq!(w.repo.saves(), 0);
}

/// Bob is offline in storage: allocate, load, insert, save once, release once.
#[test]
fn test_stored_offline_recipient_is_saved_and_released_once() {
    let w = world(RecordingRepo::with_players([Player::new("Bob")]));

    let delivery = w.postmaster.add_item_to_recipient("bob", ItemId(7)).unwrap();

    assert_eq!(delivery.recipient, "Bob");
    assert_eq!(delivery.residency, Residency::Loaded);
    assert!(delivery.persisted);

    let metrics = w.postmaster.metrics().snapshot();
    assert_eq!(metrics.records_allocated, 1);
    assert_eq!(metrics.records_released, 1);
    assert_eq!(metrics.saves, 1);
    assert_eq!(w.repo.loads(), 1);
    assert_eq!(w.repo.saves(), 1);

    let stored = w.repo.stored("Bob");
    assert_eq!(stored.inbox.count_of(ItemId(7)), 1);
    assert_eq!(stored.inbox.items()[0].serial, delivery.serial);
}

/// Carol does not exist: allocate, release, no item creation.
#[test]
fn test_missing_recipient_creates_no_item() {
    let w = world(RecordingRepo::default());

    let err = w.postmaster.add_item_to_recipient("Carol", ItemId(42)).unwrap_err();

    assert!(matches!(err, DeliveryError::PlayerNotFound { ref name } if name == "Carol"));
    let metrics = w.postmaster.metrics().snapshot();
    assert_eq!(metrics.records_allocated, 1);
    assert_eq!(metrics.records_released, 1);
    assert_eq!(metrics.items_created, 0);
    assert_eq!(w.items.creates(), 0);
    assert_eq!(w.repo.saves(), 0);
}

#[test]
fn test_item_creation_failure_releases_loaded_record() {
    let w = world(RecordingRepo::with_players([Player::new("Bob")]));

    let err = w.postmaster.add_item_to_recipient("Bob", ItemId(9999)).unwrap_err();

    assert!(matches!(
        err,
        DeliveryError::ItemCreationFailed {
            item_id: ItemId(9999)
        }
    ));
    assert_eq!(w.items.creates(), 1);
    assert_eq!(w.repo.saves(), 0);
    assert!(w.repo.stored("Bob").inbox.is_empty());

    let metrics = w.postmaster.metrics();
    assert_eq!(metrics.records_allocated(), 1);
    assert_eq!(metrics.records_released(), 1);
}

#[test]
fn test_item_creation_failure_leaves_resident_record_alone() {
    let w = world(RecordingRepo::default());
    let alice = w.directory.login(Player::new("Alice")).unwrap();
    let refs_before = Arc::strong_count(&alice);

    let err = w.postmaster.add_item_to_recipient("Alice", ItemId(9999)).unwrap_err();

    assert!(matches!(err, DeliveryError::ItemCreationFailed { .. }));
    assert_eq!(Arc::strong_count(&alice), refs_before);
    assert!(alice.read().unwrap().inbox.is_empty());
    assert_eq!(w.postmaster.metrics().records_released(), 0);
}

/// A loader that writes into the record before failing still leaves it
/// safe to release.
#[test]
fn test_load_error_after_partial_write_releases_once() {
    let w = world(RecordingRepo {
        fail_loads: true,
        ..RecordingRepo::default()
    });

    let err = w.postmaster.add_item_to_recipient("Bob", ItemId(7)).unwrap_err();

    assert!(matches!(err, DeliveryError::Storage(RepositoryError::Io(_))));
    assert_eq!(w.items.creates(), 0);
    let metrics = w.postmaster.metrics();
    assert_eq!(metrics.records_allocated(), 1);
    assert_eq!(metrics.records_released(), 1);
}

#[test]
fn test_online_recipient_is_not_saved() {
    let w = world(RecordingRepo::default());
    w.directory.login(Player::new("Alice")).unwrap();

    w.postmaster.add_item_to_recipient("Alice", ItemId(7)).unwrap();
    w.postmaster.add_item_to_recipient("Alice", ItemId(7)).unwrap();

    assert_eq!(w.repo.saves(), 0);
}

/// A record saved while its player was connected is offline once it is only
/// in storage: the delivery is written back, not dropped with the record.
#[test]
fn test_stored_record_flagged_online_is_saved() {
    let mut erin = Player::new("Erin");
    erin.status = PlayerStatus::Online;
    let w = world(RecordingRepo::with_players([erin]));

    let delivery = w.postmaster.add_item_to_recipient("Erin", ItemId(7)).unwrap();

    assert_eq!(delivery.residency, Residency::Loaded);
    assert!(delivery.persisted);
    assert_eq!(w.repo.saves(), 1);

    let stored = w.repo.stored("erin");
    assert_eq!(stored.inbox.len(), 1);
    assert_eq!(stored.status, PlayerStatus::Offline);

    let metrics = w.postmaster.metrics().snapshot();
    assert_eq!(metrics.records_allocated, 1);
    assert_eq!(metrics.records_released, 1);
}

/// A resident record flagged offline (e.g. mid-logout) is still saved.
#[test]
fn test_offline_resident_recipient_is_saved_once() {
    let w = world(RecordingRepo::default());
    let dora = w.directory.login(Player::new("Dora")).unwrap();
    dora.write().unwrap().status = PlayerStatus::Offline;

    let delivery = w.postmaster.add_item_to_recipient("Dora", ItemId(42)).unwrap();

    assert_eq!(delivery.residency, Residency::Resident);
    assert!(delivery.persisted);
    assert_eq!(w.repo.saves(), 1);
    assert_eq!(w.repo.stored("dora").inbox.count_of(ItemId(42)), 1);
    assert_eq!(w.postmaster.metrics().records_released(), 0);
}

#[test]
fn test_save_failure_is_best_effort() {
    let w = world(RecordingRepo {
        fail_saves: true,
        ..RecordingRepo::with_players([Player::new("Bob")])
    });

    let delivery = w.postmaster.add_item_to_recipient("Bob", ItemId(7)).unwrap();

    assert!(!delivery.persisted);
    assert_eq!(w.repo.saves(), 1);
    let metrics = w.postmaster.metrics().snapshot();
    assert_eq!(metrics.save_failures, 1);
    assert_eq!(metrics.delivered, 1);
    assert_eq!(metrics.records_released, 1);
}

/// Every exit path balances allocations and releases.
#[test]
fn test_mixed_deliveries_balance_allocations() {
    let w = world(RecordingRepo::with_players([Player::new("Bob")]));
    w.directory.login(Player::new("Alice")).unwrap();

    let calls = [
        ("Alice", ItemId(42)),
        ("Bob", ItemId(7)),
        ("Carol", ItemId(7)),
        ("Bob", ItemId(9999)),
        ("Alice", ItemId(9999)),
        ("Bob", ItemId(42)),
    ];
    for (name, item) in calls {
        let _ = w.postmaster.add_item_to_recipient(name, item);
    }

    let metrics = w.postmaster.metrics().snapshot();
    assert_eq!(metrics.records_allocated, 4);
    assert_eq!(metrics.records_released, 4);
    assert_eq!(metrics.delivered, 3);
    assert_eq!(metrics.failed, 3);
    assert_eq!(w.postmaster.metrics().live_records(), 0);

    let bob = w.repo.stored("Bob");
    assert_eq!(bob.inbox.count_of(ItemId(7)), 1);
    assert_eq!(bob.inbox.count_of(ItemId(42)), 1);
}

/// Deliveries ignore the inbox capacity.
#[test]
fn test_delivery_ignores_inbox_capacity() {
    let w = world(RecordingRepo::default());
    let mut tiny = Player::new("Tiny");
    tiny.inbox = game_core::Inbox::new(1);
    let tiny = w.directory.login(tiny).unwrap();

    for _ in 0..3 {
        w.postmaster.add_item_to_recipient("Tiny", ItemId(7)).unwrap();
    }

    assert_eq!(tiny.read().unwrap().inbox.len(), 3);
}

// ============================================================================
// File-backed end to end
// ============================================================================

#[test]
fn test_file_repository_with_builtin_catalog() {
    let temp = TempDir::new().unwrap();
    let repo = Arc::new(FilePlayerRepository::new(temp.path()).unwrap());
    repo.save(&Player::new("Bob")).unwrap();

    let directory = Arc::new(InMemoryPlayerDirectory::new());
    let items = Arc::new(CatalogItemFactory::from_definitions(
        ItemLoader::builtin().unwrap(),
    ));
    let postmaster = Postmaster::builder()
        .directory(directory.clone())
        .repository(repo.clone())
        .items(items)
        .build()
        .unwrap();

    postmaster.add_item_to_recipient("Bob", ItemId(7)).unwrap();
    postmaster.add_item_to_recipient("Bob", ItemId(42)).unwrap();

    // Bob logs in: the directory now owns his record.
    let mut bob = Player::default();
    assert!(repo.load_by_name("Bob", &mut bob).unwrap());
    let handle = directory.login(bob).unwrap();

    let delivery = postmaster.add_item_to_recipient("Bob", ItemId(100)).unwrap();
    assert_eq!(delivery.residency, Residency::Resident);
    assert!(!delivery.persisted);
    assert_eq!(handle.read().unwrap().inbox.len(), 3);

    // Logging out writes the resident record back.
    assert!(directory.logout_and_save("Bob", repo.as_ref()).unwrap());
    let names: Vec<String> = postmaster
        .inbox("Bob")
        .unwrap()
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, vec!["Gold Coin", "Short Sword", "Birthday Present"]);
    assert_eq!(postmaster.metrics().live_records(), 0);
}
