use std::io::{BufRead, Write};

use crate::clients::FilmCatalog;
use crate::models::movie::MovieRecord;
use crate::services::{
    LookupOutcome, LookupService, NotFoundReason, SaveOutcome, save_results,
};

const BANNER: &str = "--- Парсер информации о фильмах с Кинопоиска ---";
const PROMPT: &str = "Введите название фильма (или 'выход' для завершения): ";
const EXIT_WORD: &str = "выход";
const SEPARATOR_WIDTH: usize = 30;

/// Where each found film is written.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub format: String,
    pub base_name: String,
}

fn is_exit(input: &str) -> bool {
    input.to_lowercase() == EXIT_WORD
}

/// Reads titles from `input` until the exit word or end of input.
///
/// Lookup and save problems are reported to `out` and the session goes on;
/// only a failure of `input`/`out` themselves ends it with an error.
pub async fn cmd_interactive<C, R, W>(
    lookup: &LookupService<C>,
    settings: &SessionSettings,
    mut input: R,
    mut out: W,
) -> anyhow::Result<()>
where
    C: FilmCatalog,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{BANNER}")?;

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let title = line.trim();
        if is_exit(title) {
            break;
        }

        if title.is_empty() {
            writeln!(out, "Название фильма не может быть пустым. Попробуйте снова.")?;
            continue;
        }

        let outcome = lookup.lookup(title).await;
        report_outcome(&mut out, title, outcome, settings)?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }

    writeln!(out, "Работа парсера завершена.")?;
    Ok(())
}

fn report_outcome<W: Write>(
    out: &mut W,
    title: &str,
    outcome: LookupOutcome,
    settings: &SessionSettings,
) -> std::io::Result<()> {
    match outcome {
        LookupOutcome::Found(record) => {
            print_summary(out, &record)?;
            save_record(out, &record, settings)
        }
        LookupOutcome::NotFound(NotFoundReason::NoSearchResults) => {
            writeln!(out, "Фильм '{title}' не найден на Кинопоиске.")?;
            writeln!(out, "Не удалось получить информацию о фильме.")
        }
        LookupOutcome::NotFound(NotFoundReason::NoDetails { kp_id }) => {
            writeln!(
                out,
                "Не удалось получить подробную информацию о фильме '{title}' (ID: {kp_id})."
            )?;
            writeln!(out, "Не удалось получить информацию о фильме.")
        }
        LookupOutcome::Failed(e) => {
            writeln!(out, "Произошла ошибка при парсинге фильма '{title}': {e}")?;
            writeln!(out, "Не удалось получить информацию о фильме.")
        }
    }
}

fn print_summary<W: Write>(out: &mut W, record: &MovieRecord) -> std::io::Result<()> {
    let name = record
        .title_ru
        .as_deref()
        .or(record.title_en.as_deref())
        .unwrap_or("без названия");
    let year = record
        .year
        .map_or_else(|| "?".to_string(), |y| y.to_string());

    writeln!(out, "Найден фильм: {name} ({year}), ID: {}", record.kp_id)?;
    if let Some(rating) = record.rating_kp {
        writeln!(out, "Рейтинг Кинопоиска: {rating}")?;
    }
    writeln!(out, "Ссылка: {}", record.link())
}

fn save_record<W: Write>(
    out: &mut W,
    record: &MovieRecord,
    settings: &SessionSettings,
) -> std::io::Result<()> {
    match save_results(
        std::slice::from_ref(record),
        &settings.format,
        &settings.base_name,
    ) {
        Ok(SaveOutcome::Saved(path)) => {
            writeln!(out, "Данные успешно сохранены в файл: {}", path.display())
        }
        Ok(SaveOutcome::NothingToSave) => writeln!(out, "Нет данных для сохранения."),
        Err(e) => writeln!(out, "Ошибка при сохранении данных: {e}"),
    }
}
