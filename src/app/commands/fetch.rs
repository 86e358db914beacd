//! Interactive fetch pipeline: select a module and resource, pull translations
//! from Transifex, and write per-locale language files.

use std::fs;

use chrono::Local;
use toml::value::Table;

use crate::app::interact::choose;
use crate::domain::{AppError, ConfigStore, DEFAULT_DOMAIN, LANGUAGES_DIR, language_file};
use crate::ports::{Console, ModuleRegistry, TranslationClient};

use super::configure::config_file_path;

/// Run the interactive `fetch` command.
///
/// `make_client` builds a translation client from the stored API token and a
/// module's project; a fresh client is created whenever a module is selected.
pub fn execute<C, M, T, F>(console: &C, registry: &M, make_client: F) -> Result<(), AppError>
where
    C: Console,
    M: ModuleRegistry,
    T: TranslationClient,
    F: Fn(&str, &str) -> Result<T, AppError>,
{
    let config_path = config_file_path(registry)?;
    if !config_path.is_file() {
        return Err(AppError::NoConfiguration);
    }
    let store = ConfigStore::load(&fs::read_to_string(&config_path)?)?;

    let token = match store.get_str("general.apitoken") {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => return Err(AppError::MissingToken),
    };

    let modules = store.get_table("extension").cloned().unwrap_or_default();
    if modules.is_empty() {
        return Err(AppError::NoModuleConfig);
    }

    let available = available_modules(console, registry, &modules);

    loop {
        let choice =
            choose(console, "Please select a module to fetch the translations:", &available)?;
        if choice == 0 {
            break;
        }
        let module = &available[choice - 1];

        let project = store
            .get_str(&format!("extension.{module}.project"))
            .unwrap_or_default()
            .to_string();
        let client = make_client(&token, &project)?;

        let resources: Vec<String> = store
            .get_table(&format!("extension.{module}.resourceMapping"))
            .map(|mapping| mapping.keys().cloned().collect())
            .unwrap_or_default();

        loop {
            let choice = choose(
                console,
                "Please select a resource to fetch the translations:",
                &resources,
            )?;
            if choice == 0 {
                break;
            }
            let resource = &resources[choice - 1];
            let domain = store
                .get_str(&format!("extension.{module}.resourceMapping.{resource}"))
                .unwrap_or(DEFAULT_DOMAIN);

            // A failed fetch only cancels this resource; the menus resume.
            if let Err(error) = fetch_and_write(console, registry, &client, module, resource, domain)
            {
                console.comment(&format!("Fetching resource {resource} failed: {error}"));
            }
        }
    }
    Ok(())
}

/// Eligibility scan: keep configured modules that exist and carry a complete
/// configuration, in configuration order; everything else is skipped with a note.
fn available_modules<C, M>(console: &C, registry: &M, modules: &Table) -> Vec<String>
where
    C: Console,
    M: ModuleRegistry,
{
    let mut available = Vec::new();
    for (name, config) in modules {
        let project = config.get("project").and_then(|value| value.as_str());
        let mapping = config.get("resourceMapping").and_then(|value| value.as_table());

        if !registry.exists(name) {
            console.comment(&format!(
                "Module {name} does not exist and is therefore being ignored. You can correct this by using the config command."
            ));
        } else if project.is_none() {
            console.comment(&format!(
                "Module {name} has incomplete configuration (project is missing) and is therefore being ignored. You can correct this by using the config command."
            ));
        } else if mapping.is_none_or(Table::is_empty) {
            console.comment(&format!(
                "Module {name} has incomplete configuration (resource mapping is missing) and is therefore being ignored. You can correct this by using the config command."
            ));
        } else {
            available.push(name.clone());
        }
    }
    available
}

/// Fetch every available locale of one resource and overwrite the module's
/// language files for its domain.
fn fetch_and_write<C, M, T>(
    console: &C,
    registry: &M,
    client: &T,
    module: &str,
    resource: &str,
    domain: &str,
) -> Result<(), AppError>
where
    C: Console,
    M: ModuleRegistry,
    T: TranslationClient,
{
    let locales = client.fetch_locales(resource)?;

    console.line("");
    console.info(&format!("Updating translations for {module} domain {domain}"));

    let timestamp = Local::now().format("%Y-%m-%d %H:%M%z").to_string();
    let module_path = registry.resolve_path(module);

    for locale in locales {
        console.line(&format!("Fetching translations for locale {locale}"));
        let translations = client.fetch_translations(resource, &locale)?;

        // New languages don't have a folder yet.
        let folder = module_path.join(LANGUAGES_DIR).join(&locale);
        fs::create_dir_all(&folder)?;

        let content = language_file::render(&locale, module, &timestamp, &translations)?;
        fs::write(folder.join(format!("{domain}.toml")), content)?;
    }

    console.info("All translations are fetched and updated.");
    Ok(())
}
