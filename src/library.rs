//! The user's presentation collection, backed by a [`PresentationStore`].
//!
//! Every mutation loads the collection, changes a copy and saves it whole. If the change
//! or the save fails, the stored collection is left as it was.

use crate::errors::{DeckError, Result};
use crate::models::presentation::Presentation;
use crate::models::template::template_by_id;
use crate::store::PresentationStore;

#[derive(Debug)]
pub struct PresentationLibrary<S> {
    store: S,
}

impl<S: PresentationStore> PresentationLibrary<S> {
    pub fn new(store: S) -> Self {
        PresentationLibrary { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list(&self) -> Result<Vec<Presentation>> {
        Ok(self.store.load()?)
    }

    pub fn get(&self, id: &str) -> Result<Option<Presentation>> {
        Ok(self.store.load()?.into_iter().find(|p| p.id == id))
    }

    fn commit<T>(&self, change: impl FnOnce(&mut Vec<Presentation>) -> Result<T>) -> Result<T> {
        let mut presentations = self.store.load()?;
        let result = change(&mut presentations)?;
        self.store.save(&presentations)?;
        Ok(result)
    }

    /// Adds a presentation (created, generated or imported) to the end of the collection.
    pub fn add(&self, presentation: Presentation) -> Result<Presentation> {
        self.commit(|all| {
            all.push(presentation.clone());
            Ok(())
        })?;
        log::info!("Added presentation '{}'", presentation.title);
        Ok(presentation)
    }

    pub fn create(&self, title: &str) -> Result<Presentation> {
        self.add(Presentation::create(title)?)
    }

    pub fn create_from_template(&self, template_id: &str, title: &str) -> Result<Presentation> {
        let template = template_by_id(template_id).ok_or_else(|| {
            DeckError::validation(format!("Unknown template '{}'", template_id))
        })?;
        self.add(Presentation::from_template(template, title)?)
    }

    /// Removes a presentation. Returns `false` if no presentation had that id.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let removed = self.commit(|all| {
            let before = all.len();
            all.retain(|p| p.id != id);
            Ok(all.len() != before)
        })?;
        if removed {
            log::info!("Deleted presentation {}", id);
        }
        Ok(removed)
    }

    /// Applies `edit` to one presentation and saves the collection.
    ///
    /// # Errors
    ///
    /// `DeckError::Validation` if no presentation has `id`; otherwise any error from
    /// `edit` or the store.
    pub fn update<T>(
        &self,
        id: &str,
        edit: impl FnOnce(&mut Presentation) -> Result<T>,
    ) -> Result<T> {
        self.commit(|all| {
            let presentation = all
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| DeckError::validation(format!("Presentation '{}' not found", id)))?;
            let result = edit(presentation)?;
            presentation.touch();
            Ok(result)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::ThemeId;
    use crate::store::{FileStore, MemoryStore, StoreError};

    fn library() -> PresentationLibrary<MemoryStore> {
        PresentationLibrary::new(MemoryStore::default())
    }

    #[test]
    fn create_and_delete() {
        let library = library();
        let a = library.create("A").unwrap();
        library.create_from_template("business-pitch", "B").unwrap();
        assert_eq!(library.list().unwrap().len(), 2);
        assert!(library.create("  ").is_err());
        assert!(library.create_from_template("nope", "C").is_err());

        assert!(library.delete(&a.id).unwrap());
        assert!(!library.delete(&a.id).unwrap());
        assert_eq!(library.list().unwrap().len(), 1);
    }

    #[test]
    fn update_persists_changes() {
        let library = library();
        let a = library.create("A").unwrap();
        let index = library.update(&a.id, |p| Ok(p.add_slide())).unwrap();
        assert_eq!(index, 1);
        library
            .update(&a.id, |p| {
                p.set_theme(ThemeId::WarmOrange);
                Ok(())
            })
            .unwrap();

        let stored = library.get(&a.id).unwrap().unwrap();
        assert_eq!(stored.slides.len(), 2);
        assert_eq!(stored.theme, ThemeId::WarmOrange);
    }

    #[test]
    fn failed_update_leaves_store_unchanged() {
        let library = library();
        let a = library.create("A").unwrap();
        let rx = library.store().subscribe();

        let err = library.update(&a.id, |p| {
            p.add_slide();
            p.rename("")
        });
        assert!(err.is_err());
        assert!(!rx.has_changed().unwrap());
        assert_eq!(library.get(&a.id).unwrap().unwrap().slides.len(), 1);
        assert!(library.update("missing", |_| Ok(())).is_err());
    }

    #[test]
    fn unreadable_entry_blocks_writes_instead_of_dropping_decks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.json");
        let library = PresentationLibrary::new(FileStore::open(&path).unwrap());

        let seeded = r#"{"presentations":[
            {"id":"p1","title":"Good","createdAt":1,"updatedAt":1,"theme":"medical-green"},
            {"id":"p2","title":"Other","createdAt":1,"updatedAt":1,"theme":"ocean-teal"}
        ]}"#;
        std::fs::write(&path, seeded).unwrap();

        let err = library.create("New").unwrap_err();
        assert!(matches!(err, DeckError::Store(StoreError::Json(_))));
        assert!(library.list().is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), seeded);
    }
}
