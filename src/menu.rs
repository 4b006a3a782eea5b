//! Context menu contribution.
//!
//! Rebuilt from current settings on every menu-construction event the host
//! emits. Ungrouped editors get one top-level entry each; grouped editors
//! share a single "Open in External Editor" submenu.

use std::sync::Arc;

use crate::editors::{enabled_editors, Editor};
use crate::host::{Menu, Target};
use crate::launch::Launcher;
use crate::settings::PluginSettings;

pub const GROUP_MENU_TITLE: &str = "Open in External Editor";
pub const MENU_ICON: &str = "external-link";

/// Add "Open in ..." entries for `target` to the given menu.
///
/// No entries are added when nothing is enabled. Click handlers capture
/// the editor descriptor and target at contribution time and dispatch the
/// launch on a background task.
pub fn contribute(
    menu: &mut dyn Menu,
    target: Option<&Target>,
    settings: &PluginSettings,
    launcher: &Arc<Launcher>,
) {
    let editors = enabled_editors(settings);
    if editors.is_empty() {
        return;
    }

    let (grouped, ungrouped): (Vec<Editor>, Vec<Editor>) =
        editors.into_iter().partition(|e| e.grouped);

    for editor in ungrouped {
        add_open_entry(menu, editor, target, launcher);
    }

    if !grouped.is_empty() {
        let submenu = menu.add_submenu(GROUP_MENU_TITLE, MENU_ICON);
        for editor in grouped {
            add_open_entry(submenu, editor, target, launcher);
        }
    }
}

fn add_open_entry(
    menu: &mut dyn Menu,
    editor: Editor,
    target: Option<&Target>,
    launcher: &Arc<Launcher>,
) {
    let title = format!("Open in {}", editor.name);
    let launcher = Arc::clone(launcher);
    let target = target.cloned();
    menu.add_entry(
        &title,
        MENU_ICON,
        Box::new(move || launcher.open_detached(editor, target)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ClickHandler, DirVault, Notifier};
    use crate::launch::OsFamily;
    use crate::settings::EditorToggles;

    /// Menu fake recording entry structure.
    struct FakeMenu {
        pub entries: Vec<FakeEntry>,
    }

    enum FakeEntry {
        Item {
            title: String,
            icon: String,
            on_click: Option<ClickHandler>,
        },
        Submenu {
            title: String,
            menu: Box<FakeMenu>,
        },
    }

    impl FakeMenu {
        fn new() -> Self {
            Self {
                entries: Vec::new(),
            }
        }

        fn titles(&self) -> Vec<&str> {
            self.entries
                .iter()
                .map(|e| match e {
                    FakeEntry::Item { title, .. } | FakeEntry::Submenu { title, .. } => {
                        title.as_str()
                    }
                })
                .collect()
        }
    }

    impl Menu for FakeMenu {
        fn add_entry(&mut self, title: &str, icon: &str, on_click: ClickHandler) {
            self.entries.push(FakeEntry::Item {
                title: title.to_string(),
                icon: icon.to_string(),
                on_click: Some(on_click),
            });
        }

        fn add_submenu(&mut self, title: &str, _icon: &str) -> &mut dyn Menu {
            self.entries.push(FakeEntry::Submenu {
                title: title.to_string(),
                menu: Box::new(FakeMenu::new()),
            });
            match self.entries.last_mut().unwrap() {
                FakeEntry::Submenu { menu, .. } => menu.as_mut(),
                FakeEntry::Item { .. } => unreachable!(),
            }
        }
    }

    struct NullNotifier;
    impl Notifier for NullNotifier {
        fn notify(&self, _message: &str) {}
    }

    fn test_launcher() -> Arc<Launcher> {
        Arc::new(Launcher::with_family(
            Arc::new(DirVault::new("/vault")),
            Arc::new(NullNotifier),
            OsFamily::Other,
        ))
    }

    fn settings_with(entries: &[(&str, bool, bool)]) -> PluginSettings {
        let mut settings = PluginSettings::default();
        settings.backfill_builtins();
        for (id, enabled, grouped) in entries {
            settings.built_in_editors.insert(
                id.to_string(),
                EditorToggles {
                    enabled: *enabled,
                    grouped: *grouped,
                },
            );
        }
        settings
    }

    #[test]
    fn test_contribute_nothing_enabled() {
        let settings = settings_with(&[]);
        let mut menu = FakeMenu::new();

        contribute(&mut menu, None, &settings, &test_launcher());

        assert!(menu.entries.is_empty());
    }

    #[test]
    fn test_contribute_partitions_grouped_and_ungrouped() {
        // A ungrouped, B grouped
        let settings = settings_with(&[("vscode", true, false), ("zed", true, true)]);
        let mut menu = FakeMenu::new();

        contribute(
            &mut menu,
            Some(&Target::File("note.md".to_string())),
            &settings,
            &test_launcher(),
        );

        assert_eq!(
            menu.titles(),
            vec!["Open in Visual Studio Code", "Open in External Editor"]
        );

        match &menu.entries[1] {
            FakeEntry::Submenu { menu: submenu, .. } => {
                assert_eq!(submenu.titles(), vec!["Open in Zed"]);
            }
            FakeEntry::Item { .. } => panic!("expected submenu entry"),
        }
    }

    #[test]
    fn test_contribute_all_ungrouped_has_no_submenu() {
        let settings = settings_with(&[("vscode", true, false), ("zed", true, false)]);
        let mut menu = FakeMenu::new();

        contribute(&mut menu, None, &settings, &test_launcher());

        assert_eq!(
            menu.titles(),
            vec!["Open in Visual Studio Code", "Open in Zed"]
        );
        assert!(menu
            .entries
            .iter()
            .all(|e| matches!(e, FakeEntry::Item { .. })));
    }

    #[test]
    fn test_contribute_all_grouped_single_parent() {
        let settings = settings_with(&[
            ("vscode", true, true),
            ("zed", true, true),
            ("sublime", true, true),
        ]);
        let mut menu = FakeMenu::new();

        contribute(&mut menu, None, &settings, &test_launcher());

        assert_eq!(menu.titles(), vec!["Open in External Editor"]);
        match &menu.entries[0] {
            FakeEntry::Submenu { menu: submenu, .. } => {
                assert_eq!(submenu.entries.len(), 3);
            }
            FakeEntry::Item { .. } => panic!("expected submenu entry"),
        }
    }

    #[test]
    fn test_contribute_uses_external_link_icon() {
        let settings = settings_with(&[("vscode", true, false)]);
        let mut menu = FakeMenu::new();

        contribute(&mut menu, None, &settings, &test_launcher());

        match &menu.entries[0] {
            FakeEntry::Item { icon, on_click, .. } => {
                assert_eq!(icon, MENU_ICON);
                // Handler is attached at contribution time
                assert!(on_click.is_some());
            }
            FakeEntry::Submenu { .. } => panic!("expected plain entry"),
        }
    }
}
