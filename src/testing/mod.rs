//! Scripted and in-memory adapters for exercising the interactive commands.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use crate::domain::{AppError, RESERVED_MODULE, TranslationMap};
use crate::ports::{Console, ModuleRegistry, TranslationClient};

/// Console fed from a queue of scripted answers, capturing all output.
pub struct ScriptedConsole {
    answers: RefCell<VecDeque<String>>,
    output: RefCell<Vec<String>>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|answer| answer.to_string()).collect()),
            output: RefCell::new(Vec::new()),
        }
    }

    pub fn output(&self) -> Vec<String> {
        self.output.borrow().clone()
    }

    pub fn output_contains(&self, needle: &str) -> bool {
        self.output.borrow().iter().any(|line| line.contains(needle))
    }

    fn next_answer(&self) -> Result<String, AppError> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AppError::Prompt("scripted console ran out of answers".into()))
    }
}

impl Console for ScriptedConsole {
    fn line(&self, text: &str) {
        self.output.borrow_mut().push(text.to_string());
    }

    fn comment(&self, text: &str) {
        self.output.borrow_mut().push(text.to_string());
    }

    fn info(&self, text: &str) {
        self.output.borrow_mut().push(text.to_string());
    }

    fn prompt(&self, question: &str) -> Result<String, AppError> {
        self.output.borrow_mut().push(question.to_string());
        self.next_answer()
    }

    fn prompt_secret(&self, question: &str) -> Result<String, AppError> {
        self.output.borrow_mut().push(question.to_string());
        self.next_answer()
    }
}

/// Registry over a fixed module name to path mapping.
pub struct InMemoryModuleRegistry {
    modules: Vec<(String, PathBuf)>,
}

impl InMemoryModuleRegistry {
    pub fn new(modules: Vec<(String, PathBuf)>) -> Self {
        Self { modules }
    }
}

impl ModuleRegistry for InMemoryModuleRegistry {
    fn exists(&self, name: &str) -> bool {
        name != RESERVED_MODULE && self.modules.iter().any(|(known, _)| known == name)
    }

    fn resolve_path(&self, name: &str) -> PathBuf {
        self.modules
            .iter()
            .find(|(known, _)| known == name)
            .map(|(_, path)| path.clone())
            .unwrap_or_default()
    }
}

/// Client answering from canned locale lists and translation maps.
pub struct StubTranslationClient {
    locales: Vec<String>,
    translations: HashMap<(String, String), TranslationMap>,
    fail_locales: bool,
}

impl StubTranslationClient {
    pub fn new(locales: &[&str]) -> Self {
        Self {
            locales: locales.iter().map(|locale| locale.to_string()).collect(),
            translations: HashMap::new(),
            fail_locales: false,
        }
    }

    pub fn failing() -> Self {
        Self { locales: Vec::new(), translations: HashMap::new(), fail_locales: true }
    }

    pub fn with_translations(
        mut self,
        resource: &str,
        locale: &str,
        entries: &[(&str, &str)],
    ) -> Self {
        let map = TranslationMap::from_records(
            entries.iter().map(|(source, translation)| (source.to_string(), translation.to_string())),
        );
        self.translations.insert((resource.to_string(), locale.to_string()), map);
        self
    }
}

impl TranslationClient for StubTranslationClient {
    fn fetch_locales(&self, _resource: &str) -> Result<Vec<String>, AppError> {
        if self.fail_locales {
            return Err(AppError::RemoteUnavailable("connection refused".into()));
        }
        Ok(self.locales.clone())
    }

    fn fetch_translations(
        &self,
        resource: &str,
        locale: &str,
    ) -> Result<TranslationMap, AppError> {
        self.translations
            .get(&(resource.to_string(), locale.to_string()))
            .cloned()
            .ok_or_else(|| AppError::RemoteFormat(format!("no strings for {resource}/{locale}")))
    }
}
