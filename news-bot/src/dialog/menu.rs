//! Menu catalog: categories, period options, button labels, callback tokens and prompt texts.

use crate::core::{InlineButton, Keyboard};

pub const LABEL_ALL_NEWS: &str = "🔹 Все Новости";
pub const LABEL_CHOOSE_CATEGORY: &str = "🗂 Выбрать категорию";
pub const LABEL_SEARCH: &str = "🔍 Поиск по ключевому слову";
pub const LABEL_NEWS: &str = "📰 Новости";

pub const TEXT_WELCOME: &str = "Добро пожаловать! Выберите опцию из меню ниже.";
pub const TEXT_CHOOSE_OPTION: &str = "Выберите опцию:";
pub const TEXT_CHOOSE_PERIOD: &str = "Выберите период:";
pub const TEXT_CHOOSE_CATEGORY: &str = "Выберите категорию новостей:";
pub const TEXT_ASK_DAYS: &str = "Введите количество дней (например, 10):";
pub const TEXT_ASK_RANGE: &str = "Введите период в формате YYYY-MM-DD YYYY-MM-DD:";
pub const TEXT_SEARCH_HELP: &str = "Введите ключевое слово для поиска. Вы можете также указать диапазон дат в формате:\n\
ключевое_слово YYYY-MM-DD YYYY-MM-DD\n\n\
Примеры:\nДТП\nДТП 2024-12-01 2024-12-15";
pub const TEXT_BAD_DAYS: &str = "Некорректный ввод. Введите число.";
pub const TEXT_BAD_RANGE: &str = "Некорректный формат. Введите в формате YYYY-MM-DD YYYY-MM-DD.";
pub const TEXT_BAD_SEARCH: &str = "Некорректный ввод. Введите ключевое слово и, при необходимости, диапазон дат в формате YYYY-MM-DD YYYY-MM-DD.";
pub const TEXT_NO_CATEGORY: &str = "Ошибка! Категория не выбрана.";
pub const TEXT_UNKNOWN_SELECTION: &str = "Произошла ошибка. Попробуйте ещё раз.";
pub const TEXT_STORE_FAILURE: &str = "Не удалось получить новости. Попробуйте позже.";
pub const TEXT_SEND_FAILURE: &str = "Не удалось отправить часть новостей. Попробуйте позже.";

/// The six fixed news sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Novosti,
    Politics,
    Economics,
    Society,
    Incident,
    CultureSport,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Novosti,
        Category::Politics,
        Category::Economics,
        Category::Society,
        Category::Incident,
        Category::CultureSport,
    ];

    /// Slug stored in the `category` column and used in source URLs.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Novosti => "novosti",
            Category::Politics => "politics",
            Category::Economics => "economics",
            Category::Society => "society",
            Category::Incident => "incident",
            Category::CultureSport => "culture-i-sport",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Novosti => "Новости",
            Category::Politics => "Политика",
            Category::Economics => "Экономика",
            Category::Society => "Общество",
            Category::Incident => "Происшествия",
            Category::CultureSport => "Культура и спорт",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    fn token(self) -> String {
        format!("category_{}", self.slug())
    }
}

/// Period buttons offered after "all news" or after a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodOption {
    Today,
    LastFiveDays,
    CustomDays,
    CustomRange,
}

impl PeriodOption {
    const ALL: [PeriodOption; 4] = [
        PeriodOption::Today,
        PeriodOption::LastFiveDays,
        PeriodOption::CustomDays,
        PeriodOption::CustomRange,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PeriodOption::Today => "Сегодня",
            PeriodOption::LastFiveDays => "5 последних дней",
            PeriodOption::CustomDays => "N последних дней",
            PeriodOption::CustomRange => "Задать диапазон",
        }
    }

    fn global_token(self) -> &'static str {
        match self {
            PeriodOption::Today => "news_today",
            PeriodOption::LastFiveDays => "news_5days",
            PeriodOption::CustomDays => "news_custom_days",
            PeriodOption::CustomRange => "news_period",
        }
    }

    fn category_token(self) -> &'static str {
        match self {
            PeriodOption::Today => "period_today",
            PeriodOption::LastFiveDays => "period_5days",
            PeriodOption::CustomDays => "period_custom_days",
            PeriodOption::CustomRange => "period_custom_range",
        }
    }
}

/// An inline-keyboard selection, decoded from its callback token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    CategoryChosen(Category),
    GlobalPeriod(PeriodOption),
    CategoryPeriod(PeriodOption),
    Unknown(String),
}

impl Selection {
    pub fn parse(token: &str) -> Self {
        if let Some(slug) = token.strip_prefix("category_") {
            return Category::from_slug(slug)
                .map(Selection::CategoryChosen)
                .unwrap_or_else(|| Selection::Unknown(token.to_string()));
        }
        PeriodOption::ALL
            .into_iter()
            .find_map(|p| {
                if p.global_token() == token {
                    Some(Selection::GlobalPeriod(p))
                } else if p.category_token() == token {
                    Some(Selection::CategoryPeriod(p))
                } else {
                    None
                }
            })
            .unwrap_or_else(|| Selection::Unknown(token.to_string()))
    }
}

pub fn main_menu() -> Keyboard {
    Keyboard::Menu(vec![
        vec![LABEL_ALL_NEWS.to_string()],
        vec![LABEL_CHOOSE_CATEGORY.to_string()],
        vec![LABEL_SEARCH.to_string()],
    ])
}

pub fn news_menu() -> Keyboard {
    Keyboard::Menu(vec![
        vec![LABEL_ALL_NEWS.to_string()],
        vec![LABEL_CHOOSE_CATEGORY.to_string()],
    ])
}

pub fn category_keyboard() -> Keyboard {
    Keyboard::Inline(
        Category::ALL
            .into_iter()
            .map(|c| vec![InlineButton::new(c.label(), c.token())])
            .collect(),
    )
}

pub fn global_period_keyboard() -> Keyboard {
    Keyboard::Inline(
        PeriodOption::ALL
            .into_iter()
            .map(|p| vec![InlineButton::new(p.label(), p.global_token())])
            .collect(),
    )
}

pub fn category_period_keyboard() -> Keyboard {
    Keyboard::Inline(
        PeriodOption::ALL
            .into_iter()
            .map(|p| vec![InlineButton::new(p.label(), p.category_token())])
            .collect(),
    )
}
