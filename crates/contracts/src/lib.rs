//! Общие типы портфолио-сайта: каталог работ, модель галереи, правила формы
//! обратной связи и конфигурация страницы.
//!
//! Крейт не зависит от браузера, поэтому вся логика тестируется нативно.

pub mod domain;
pub mod shared;
