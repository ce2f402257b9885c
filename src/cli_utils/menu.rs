use crate::cli_utils::CliResult;
use dialoguer::Select;

/// Interactive menu builder
pub struct Menu {
    title: String,
    items: Vec<String>,
}

impl Menu {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    pub fn items(mut self, items: Vec<&str>) -> Self {
        self.items.extend(items.iter().map(|s| s.to_string()));
        self
    }

    /// Show the menu and get the selected index
    pub fn interact(&self) -> CliResult<usize> {
        let item_refs: Vec<&str> = self.items.iter().map(|s| s.as_str()).collect();
        Ok(Select::new()
            .with_prompt(&self.title)
            .items(&item_refs)
            .default(0)
            .interact()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    List,
    Create,
    Delete,
    Exit,
}

impl Operation {
    const LABELS: [&'static str; 4] = ["List", "Create", "Delete", "Exit"];

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Operation::List,
            1 => Operation::Create,
            2 => Operation::Delete,
            _ => Operation::Exit,
        }
    }

    pub fn select() -> CliResult<Self> {
        let menu = Menu::new("Select operation").items(Self::LABELS.to_vec());
        Ok(Self::from_index(menu.interact()?))
    }
}

/// Yes/No confirmation
pub fn confirm_operation(message: &str) -> CliResult<bool> {
    use dialoguer::Confirm;
    Ok(Confirm::new().with_prompt(message).default(false).interact()?)
}
