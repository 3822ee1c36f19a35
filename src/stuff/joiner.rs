//! Une textos con un separador principal y otro distinto entre los dos ultimos.
//! Por ejemplo `one, two and three`.

/// Une `strings` separando todos menos los dos ultimos con `main_separator`, y los dos ultimos
/// con `last_separator` (o `main_separator` si es `None`).
pub fn join<I, S>(strings: I, main_separator: &str, last_separator: Option<&str>) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let strings: Vec<S> = strings.into_iter().collect();
    let last_separator = last_separator.unwrap_or(main_separator);

    match strings.split_last() {
        None => String::new(),
        Some((last, [])) => last.as_ref().to_string(),
        Some((last, rest)) => {
            let first_part: Vec<&str> = rest.iter().map(|s| s.as_ref()).collect();
            format!(
                "{}{}{}",
                first_part.join(main_separator),
                last_separator,
                last.as_ref()
            )
        }
    }
}

#[derive(Debug, Clone)]
pub struct Joiner {
    main_separator: String,
    last_separator: Option<String>,
}

impl Joiner {
    pub fn new(main_separator: &str, last_separator: &str) -> Joiner {
        Joiner {
            main_separator: main_separator.to_string(),
            last_separator: Some(last_separator.to_string()),
        }
    }

    pub fn with_separator(separator: &str) -> Joiner {
        Joiner {
            main_separator: separator.to_string(),
            last_separator: None,
        }
    }

    pub fn join<I, S>(&self, strings: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        join(
            strings,
            &self.main_separator,
            self.last_separator.as_deref(),
        )
    }
}
