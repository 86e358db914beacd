//! Interactive editor for the persisted fetcher configuration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::interact::{choose, confirm};
use crate::domain::{AppError, CONFIG_FILE, ConfigStore, DEFAULT_DOMAIN, SELF_MODULE};
use crate::ports::{Console, ModuleRegistry};

/// Run the interactive `config` command.
///
/// All edits happen on an in-memory store; nothing touches the configuration
/// file until the user confirms at the end.
pub fn execute<C, M>(console: &C, registry: &M) -> Result<(), AppError>
where
    C: Console,
    M: ModuleRegistry,
{
    let config_path = config_file_path(registry)?;
    let mut store = load_store(&config_path)?;

    let options = [
        "Transifex api token".to_string(),
        "Module specific options".to_string(),
        "Delete module specific options".to_string(),
    ];
    loop {
        match choose(console, "What do you want to configure?", &options)? {
            1 => {
                let token = console.prompt_secret("Your transifex api token:")?;
                store.set("general.apitoken", token);
                console.comment("Transifex apitoken was updated.");
            }
            2 => edit_module(console, registry, &mut store)?,
            3 => delete_module(console, &mut store)?,
            _ => break,
        }
    }

    persist(console, &store, &config_path)
}

/// Path of the persisted configuration inside this tool's own module directory.
///
/// The tool ships as a module itself; if its directory is gone there is nowhere
/// to read or write the configuration, which is fatal for both commands.
pub(crate) fn config_file_path<M: ModuleRegistry>(registry: &M) -> Result<PathBuf, AppError> {
    if !registry.exists(SELF_MODULE) {
        return Err(AppError::ModuleNotFound(SELF_MODULE.to_string()));
    }
    Ok(registry.resolve_path(SELF_MODULE).join(CONFIG_FILE))
}

fn load_store(path: &Path) -> Result<ConfigStore, AppError> {
    if path.is_file() {
        ConfigStore::load(&fs::read_to_string(path)?)
    } else {
        Ok(ConfigStore::new())
    }
}

fn edit_module<C, M>(console: &C, registry: &M, store: &mut ConfigStore) -> Result<(), AppError>
where
    C: Console,
    M: ModuleRegistry,
{
    let name = loop {
        let input = console.prompt("The module to configure (leave empty to cancel):")?;
        if input.is_empty() {
            return Ok(());
        }
        if registry.exists(&input) {
            break input;
        }
        console.line(&format!("Module '{input}' does not exist"));
    };

    let options = [
        "Transifex project".to_string(),
        "Transifex resource and domain mapping".to_string(),
    ];
    loop {
        match choose(console, "What do you want to configure?", &options)? {
            1 => {
                let project = console.prompt("Your transifex project?")?;
                let path = format!("extension.{name}.project");
                store.set(&path, project);
                console.comment(&format!(
                    "Transifex project for module {name} was updated: {}",
                    store.get_str(&path).unwrap_or_default()
                ));
            }
            2 => {
                let resource = console.prompt("Your transifex resource name:")?;
                if resource.is_empty() {
                    continue;
                }
                let domain = console.prompt(&format!(
                    "The domain name (\"{DEFAULT_DOMAIN}\" by default, leave empty to keep it):"
                ))?;
                let domain =
                    if domain.is_empty() { DEFAULT_DOMAIN.to_string() } else { domain };

                let path = format!("extension.{name}.resourceMapping.{resource}");
                store.set(&path, domain);
                console.comment(&format!(
                    "Transifex resource {resource} for module {name} was mapped to domain: {}",
                    store.get_str(&path).unwrap_or_default()
                ));
            }
            _ => break,
        }
    }
    Ok(())
}

fn delete_module<C: Console>(console: &C, store: &mut ConfigStore) -> Result<(), AppError> {
    let configured: Vec<String> = store
        .get_table("extension")
        .map(|modules| modules.keys().cloned().collect())
        .unwrap_or_default();

    let choice = choose(
        console,
        "Please select the module where you want to delete the configuration for:",
        &configured,
    )?;
    if choice == 0 {
        return Ok(());
    }
    let name = &configured[choice - 1];

    let question =
        format!("Are you sure to delete the fetcher configuration for module {name}?");
    if confirm(console, &question)? {
        store.remove(&format!("extension.{name}"));
        console.comment(&format!("Configuration for {name} was removed."));
    }
    Ok(())
}

fn persist<C: Console>(console: &C, store: &ConfigStore, path: &Path) -> Result<(), AppError> {
    if !store.dirty() {
        console.line("");
        console.line("No changes, nothing to save.");
        return Ok(());
    }

    if confirm(console, "Save the changes?")? {
        fs::write(path, store.dump()?)?;
        console.line("");
        console.info("Configuration saved.");
    } else {
        console.line("");
        console.line("Changes discarded, nothing saved.");
    }
    Ok(())
}
