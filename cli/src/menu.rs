//! Interactive numbered menu.
//!
//! The menu reads operator input line by line, runs one catalog operation
//! per choice as a full load/modify/save cycle against the store, and prints
//! the outcome. No error ends the loop; only `6` or end of input does.

use std::io::{self, BufRead, Write};

use library_catalog_core::{
    Book, BookStatus, CatalogError, IdPolicy, SearchField, change_status, delete, insert, list_all,
    parse_id, search,
};
use library_catalog_db::JsonStore;
use tracing::{info, warn};

const MENU: &str = "\
Library Management System
1. Add Book
2. Delete Book
3. Search Book
4. Display All Books
5. Change Book Status
6. Exit";

pub struct Menu<R, W> {
    input: R,
    output: W,
    store: JsonStore,
    id_policy: IdPolicy,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, store: JsonStore, id_policy: IdPolicy) -> Self {
        Self {
            input,
            output,
            store,
            id_policy,
        }
    }

    /// Runs until the operator picks Exit or input ends.
    ///
    /// Only I/O errors on the terminal streams are returned.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                break;
            };

            match choice.as_str() {
                "1" => self.add_book()?,
                "2" => self.delete_book()?,
                "3" => self.search_book()?,
                "4" => self.display_books()?,
                "5" => self.change_book_status()?,
                "6" => break,
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        writeln!(self.output, "Exiting the system. Goodbye!")?;
        self.output.flush()
    }

    /// Prints `text`, then reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_book(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n-- Add Book --")?;
        let Some(title) = self.prompt("Enter book title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter book author: ")? else {
            return Ok(());
        };
        let Some(year) = self.prompt("Enter year of publication: ")? else {
            return Ok(());
        };

        let mut books = self.store.load();
        match insert(&mut books, &title, &author, &year, self.id_policy) {
            Ok(id) => {
                if self.save(&books)? {
                    info!(id, title = %title, "added book");
                    writeln!(self.output, "Book '{title}' added successfully!")?;
                }
            }
            Err(CatalogError::IdsExhausted) => {
                writeln!(self.output, "No book ID is left for a new book.")?
            }
            Err(_) => writeln!(self.output, "Year must be a number!")?,
        }
        Ok(())
    }

    fn delete_book(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n-- Delete Book --")?;
        let Some(raw_id) = self.prompt("Enter book ID to delete: ")? else {
            return Ok(());
        };
        let Ok(parsed) = parse_id(&raw_id) else {
            return writeln!(self.output, "Invalid ID. Please enter a number.");
        };
        let Some(id) = parsed else {
            return writeln!(self.output, "No book found with ID {raw_id}.");
        };

        let mut books = self.store.load();
        if !delete(&mut books, id) {
            return writeln!(self.output, "No book found with ID {id}.");
        }
        if self.save(&books)? {
            info!(id, "deleted book");
            writeln!(self.output, "Book with ID {id} deleted successfully!")?;
        }
        Ok(())
    }

    fn search_book(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n-- Search Book --")?;
        let Some(criteria) = self.prompt("Search by (title/author/year): ")? else {
            return Ok(());
        };
        let Some(query) = self.prompt("Enter search query: ")? else {
            return Ok(());
        };

        let books = self.store.load();
        let results = criteria
            .parse::<SearchField>()
            .and_then(|field| search(&books, field, &query));

        match results {
            Ok(found) if found.is_empty() => writeln!(self.output, "No matching books found.")?,
            Ok(found) => {
                writeln!(self.output, "\nSearch Results:")?;
                for book in found {
                    writeln!(self.output, "{book}")?;
                }
            }
            Err(CatalogError::InvalidYear(_)) => writeln!(
                self.output,
                "Invalid search criteria. Year must be a number!"
            )?,
            Err(_) => writeln!(self.output, "Invalid search criteria.")?,
        }
        Ok(())
    }

    fn display_books(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n-- All Books --")?;
        let books = self.store.load();
        if books.is_empty() {
            return writeln!(self.output, "No books in the library.");
        }
        for book in list_all(&books) {
            writeln!(self.output, "{book}")?;
        }
        Ok(())
    }

    fn change_book_status(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n-- Change Book Status --")?;
        let Some(raw_id) = self.prompt("Enter book ID: ")? else {
            return Ok(());
        };
        let Ok(parsed) = parse_id(&raw_id) else {
            return writeln!(self.output, "Invalid ID. Please enter a number.");
        };
        let Some(raw_status) = self.prompt("Enter new status ('available' or 'issued'): ")? else {
            return Ok(());
        };
        let Ok(status) = raw_status.parse::<BookStatus>() else {
            return writeln!(
                self.output,
                "Invalid status. Please choose 'available' or 'issued'."
            );
        };

        let Some(id) = parsed else {
            return writeln!(self.output, "No book found with ID {raw_id}.");
        };

        let mut books = self.store.load();
        if !change_status(&mut books, id, status) {
            return writeln!(self.output, "No book found with ID {id}.");
        }
        if self.save(&books)? {
            info!(id, %status, "changed book status");
            writeln!(
                self.output,
                "Status of book with ID {id} updated to '{status}'."
            )?;
        }
        Ok(())
    }

    /// Persists `books`, reporting a failure to the operator instead of
    /// ending the loop. Returns whether the save succeeded.
    fn save(&mut self, books: &[Book]) -> io::Result<bool> {
        match self.store.save(books) {
            Ok(()) => Ok(true),
            Err(err) => {
                warn!(path = %self.store.path().display(), error = %err, "save failed");
                writeln!(self.output, "Failed to save library data: {err}")?;
                Ok(false)
            }
        }
    }
}
