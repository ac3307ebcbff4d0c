//! The interactive menu loop.

use std::io;

use crate::cli::output::Console;
use crate::engine::{Analyzer, Generator, Statistics};
use crate::lexicon::{PatternStore, RootStore};
use crate::morphology::{Pattern, Root, ValidationResult};

const INVALID_CHOICE: &str = "خيار غير صالح (invalid choice)";

/// Empty input means "keep the current value" in the modify dialog.
fn non_empty(text: &str) -> Option<&str> {
    (!text.is_empty()).then_some(text)
}

// =============================================================================
// App Definition
// =============================================================================

/// The interactive dictionary session: owns the lexicons, the generator and
/// the console, and runs the bilingual menu loop over stdin.
pub struct App {
    roots: RootStore,
    patterns: PatternStore,
    generator: Generator,
    console: Console,
}

impl App {
    /// Creates a session over pre-loaded lexicons.
    #[must_use]
    pub fn new(roots: RootStore, patterns: PatternStore, console: Console) -> Self {
        Self {
            roots,
            patterns,
            generator: Generator::new(),
            console,
        }
    }

    /// Runs the menu loop until the user exits or stdin closes.
    pub fn run(&mut self) {
        self.print_banner();
        loop {
            self.print_main_menu();
            let Some(choice) = self.read_choice() else {
                break;
            };
            match choice {
                1 => self.root_menu(),
                2 => self.pattern_menu(),
                3 => self.generation_menu(),
                4 => self.validation_menu(),
                5 => self.show_statistics(),
                0 => break,
                _ => self.console.warning(INVALID_CHOICE),
            }
        }
        self.console.plain("مع السلامة (goodbye)");
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Reads one trimmed line; `None` on EOF or a read failure.
    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Reads a menu choice; anything non-numeric counts as invalid.
    fn read_choice(&self) -> Option<i32> {
        self.read_line().map(|line| line.parse().unwrap_or(-1))
    }

    fn prompt_line(&self, label: &str) -> Option<String> {
        self.console.prompt(label);
        self.read_line()
    }

    // =========================================================================
    // Menus
    // =========================================================================

    fn print_banner(&self) {
        self.console.banner_rule();
        self.console.plain("  قاموس الصرف العربي");
        self.console.plain("  Arabic Morphological Dictionary");
        self.console.banner_rule();
    }

    fn print_main_menu(&self) {
        self.console.header("القائمة الرئيسية (main menu)");
        self.console.item("1) إدارة الجذور (root management)");
        self.console.item("2) إدارة الأوزان (pattern management)");
        self.console.item("3) توليد الكلمات (word generation)");
        self.console.item("4) التحقق من الكلمات (word validation)");
        self.console.item("5) الإحصائيات (statistics)");
        self.console.item("0) خروج (exit)");
        self.console.prompt("اختيارك (choice): ");
    }

    fn root_menu(&mut self) {
        loop {
            self.console.header("إدارة الجذور (root management)");
            self.console.item("1) إضافة جذر (add root)");
            self.console.item("2) البحث عن جذر (find root)");
            self.console.item("3) حذف جذر (delete root)");
            self.console.item("4) عرض كل الجذور (list roots)");
            self.console.item("5) عدد الجذور (root count)");
            self.console.item("0) رجوع (back)");
            self.console.prompt("اختيارك (choice): ");
            let Some(choice) = self.read_choice() else {
                return;
            };
            match choice {
                1 => self.add_root(),
                2 => self.show_root(),
                3 => self.delete_root(),
                4 => self.list_roots(),
                5 => self.count_roots(),
                0 => return,
                _ => self.console.warning(INVALID_CHOICE),
            }
        }
    }

    fn pattern_menu(&mut self) {
        loop {
            self.console.header("إدارة الأوزان (pattern management)");
            self.console.item("1) إضافة وزن (add pattern)");
            self.console.item("2) البحث عن وزن (find pattern)");
            self.console.item("3) تعديل وزن (modify pattern)");
            self.console.item("4) حذف وزن (delete pattern)");
            self.console.item("5) عرض كل الأوزان (list patterns)");
            self.console.item("6) عرض حسب التصنيف (list by category)");
            self.console.item("0) رجوع (back)");
            self.console.prompt("اختيارك (choice): ");
            let Some(choice) = self.read_choice() else {
                return;
            };
            match choice {
                1 => self.add_pattern(),
                2 => self.show_pattern(),
                3 => self.modify_pattern(),
                4 => self.delete_pattern(),
                5 => self.list_patterns(),
                6 => self.list_patterns_by_category(),
                0 => return,
                _ => self.console.warning(INVALID_CHOICE),
            }
        }
    }

    fn generation_menu(&mut self) {
        loop {
            self.console.header("توليد الكلمات (word generation)");
            self.console.item("1) توليد كلمة واحدة (one root, one pattern)");
            self.console.item("2) توليد كل الأوزان لجذر (all patterns for a root)");
            self.console.item("0) رجوع (back)");
            self.console.prompt("اختيارك (choice): ");
            let Some(choice) = self.read_choice() else {
                return;
            };
            match choice {
                1 => self.generate_single(),
                2 => self.generate_for_all_patterns(),
                0 => return,
                _ => self.console.warning(INVALID_CHOICE),
            }
        }
    }

    fn validation_menu(&mut self) {
        loop {
            self.console.header("التحقق من الكلمات (word validation)");
            self.console.item("1) التحقق من كلمة مقابل جذر (validate word against root)");
            self.console.item("2) التعرف على كلمة (identify word)");
            self.console.item("0) رجوع (back)");
            self.console.prompt("اختيارك (choice): ");
            let Some(choice) = self.read_choice() else {
                return;
            };
            match choice {
                1 => self.validate_word(),
                2 => self.identify_word(),
                0 => return,
                _ => self.console.warning(INVALID_CHOICE),
            }
        }
    }

    // =========================================================================
    // Root actions
    // =========================================================================

    fn add_root(&mut self) {
        let Some(text) = self.prompt_line("أدخل الجذر (enter root): ") else {
            return;
        };
        match Root::new(&text) {
            Ok(root) => {
                let letters = root.letters().to_string();
                if self.roots.insert(root) {
                    self.console.success(&format!("تمت إضافة الجذر: {letters}"));
                } else {
                    self.console.warning(&format!("الجذر موجود مسبقاً: {letters}"));
                }
            }
            Err(error) => self.console.error(&error.to_string()),
        }
    }

    fn show_root(&self) {
        let Some(letters) = self.prompt_line("أدخل الجذر (enter root): ") else {
            return;
        };
        let Some(root) = self.roots.find(&letters) else {
            self.console.error(&format!("الجذر غير موجود: {letters}"));
            return;
        };

        let [first, second, third] = root.radicals();
        self.console.success(&format!("الجذر: {root}"));
        self.console
            .item(&format!("الحروف (radicals): {first} {second} {third}"));

        let derivations = self.generator.derivations(root.letters());
        if derivations.is_empty() {
            self.console.item("لا توجد كلمات مشتقة (no derived words)");
        } else {
            self.console.item("الكلمات المشتقة (derived words):");
            for word in derivations {
                self.console.item(&format!(
                    "• {} (وزن {}، تكرار {})",
                    word.word(),
                    word.pattern_id(),
                    word.frequency()
                ));
            }
        }
    }

    fn delete_root(&mut self) {
        let Some(letters) = self.prompt_line("أدخل الجذر (enter root): ") else {
            return;
        };
        if self.roots.remove(&letters) {
            self.console.success(&format!("تم حذف الجذر: {letters}"));
        } else {
            self.console.error(&format!("الجذر غير موجود: {letters}"));
        }
    }

    fn list_roots(&self) {
        if self.roots.is_empty() {
            self.console.warning("لا توجد جذور مخزنة (no roots stored)");
            return;
        }
        self.console.header("الجذور (roots)");
        for root in self.roots.iter() {
            self.console.item(root.letters());
        }
        self.console.rule();
        self.console
            .plain(&format!("المجموع (total): {}", self.roots.len()));
    }

    fn count_roots(&self) {
        self.console
            .plain(&format!("عدد الجذور (root count): {}", self.roots.len()));
    }

    // =========================================================================
    // Pattern actions
    // =========================================================================

    fn add_pattern(&mut self) {
        let Some(id) = self.prompt_line("معرف الوزن (pattern id): ") else {
            return;
        };
        if id.is_empty() {
            self.console.error("المعرف مطلوب (id is required)");
            return;
        }
        let Some(structure) = self.prompt_line("البنية (structure): ") else {
            return;
        };
        if structure.is_empty() {
            self.console.error("البنية مطلوبة (structure is required)");
            return;
        }
        let Some(description) = self.prompt_line("الوصف، اختياري (description): ") else {
            return;
        };
        let Some(category) = self.prompt_line("التصنيف، اختياري (category): ") else {
            return;
        };

        let mut pattern = Pattern::new(id, structure).with_description(description);
        if !category.is_empty() {
            pattern = pattern.with_category(category);
        }
        let id = pattern.id().to_string();
        if self.patterns.insert(pattern).is_some() {
            self.console
                .warning(&format!("استُبدل الوزن الموجود: {id}"));
        } else {
            self.console.success(&format!("تمت إضافة الوزن: {id}"));
        }
    }

    fn show_pattern(&self) {
        let Some(id) = self.prompt_line("معرف الوزن (pattern id): ") else {
            return;
        };
        let Some(pattern) = self.patterns.find(&id) else {
            self.console.error(&format!("الوزن غير موجود: {id}"));
            return;
        };
        self.console.success(&format!("الوزن: {pattern}"));
        self.console
            .item(&format!("البنية (structure): {}", pattern.structure()));
        if !pattern.description().is_empty() {
            self.console
                .item(&format!("الوصف (description): {}", pattern.description()));
        }
    }

    fn modify_pattern(&mut self) {
        let Some(id) = self.prompt_line("معرف الوزن (pattern id): ") else {
            return;
        };
        if !self.patterns.contains(&id) {
            self.console.error(&format!("الوزن غير موجود: {id}"));
            return;
        }
        self.console
            .plain("اترك الحقل فارغاً للإبقاء على قيمته (blank keeps the current value)");
        let Some(structure) = self.prompt_line("البنية الجديدة (new structure): ") else {
            return;
        };
        let Some(description) = self.prompt_line("الوصف الجديد (new description): ") else {
            return;
        };
        let Some(category) = self.prompt_line("التصنيف الجديد (new category): ") else {
            return;
        };

        if self.patterns.update(
            &id,
            non_empty(&structure),
            non_empty(&description),
            non_empty(&category),
        ) {
            self.console.success(&format!("تم تعديل الوزن: {id}"));
        } else {
            self.console.error(&format!("الوزن غير موجود: {id}"));
        }
    }

    fn delete_pattern(&mut self) {
        let Some(id) = self.prompt_line("معرف الوزن (pattern id): ") else {
            return;
        };
        if self.patterns.remove(&id).is_some() {
            self.console.success(&format!("تم حذف الوزن: {id}"));
        } else {
            self.console.error(&format!("الوزن غير موجود: {id}"));
        }
    }

    fn list_patterns(&self) {
        if self.patterns.is_empty() {
            self.console
                .warning("لا توجد أوزان مخزنة (no patterns stored)");
            return;
        }
        self.console.header("الأوزان (patterns)");
        for pattern in self.patterns.iter() {
            self.print_pattern_line(pattern);
        }
        self.console.rule();
        self.console
            .plain(&format!("المجموع (total): {}", self.patterns.len()));
    }

    fn list_patterns_by_category(&self) {
        let Some(category) = self.prompt_line("التصنيف (category): ") else {
            return;
        };
        let matching = self.patterns.by_category(&category);
        if matching.is_empty() {
            self.console
                .warning(&format!("لا توجد أوزان في التصنيف: {category}"));
            return;
        }
        self.console.header(&format!("أوزان التصنيف {category}"));
        for pattern in matching {
            self.print_pattern_line(pattern);
        }
    }

    fn print_pattern_line(&self, pattern: &Pattern) {
        if pattern.description().is_empty() {
            self.console
                .item(&format!("{pattern}: {}", pattern.structure()));
        } else {
            self.console.item(&format!(
                "{pattern}: {} ({})",
                pattern.structure(),
                pattern.description()
            ));
        }
    }

    // =========================================================================
    // Generation actions
    // =========================================================================

    fn generate_single(&mut self) {
        let Some(letters) = self.prompt_line("أدخل الجذر (enter root): ") else {
            return;
        };
        let Some(pattern_id) = self.prompt_line("معرف الوزن (pattern id): ") else {
            return;
        };

        // A root that is not stored can still drive a generation, as long
        // as it parses.
        let parsed;
        let root = if let Some(stored) = self.roots.find(&letters) {
            stored
        } else {
            match Root::new(&letters) {
                Ok(fresh) => {
                    parsed = fresh;
                    &parsed
                }
                Err(error) => {
                    self.console.error(&error.to_string());
                    return;
                }
            }
        };

        let Some(pattern) = self.patterns.find(&pattern_id) else {
            self.console.error(&format!("الوزن غير موجود: {pattern_id}"));
            return;
        };

        let word = self.generator.generate(root, pattern);
        self.console
            .success(&format!("تم توليد الكلمة: {}", word.word()));
        self.console.item(&format!(
            "الجذر: {}، الوزن: {}، التكرار: {}",
            word.root_letters(),
            word.pattern_id(),
            word.frequency()
        ));
    }

    fn generate_for_all_patterns(&mut self) {
        let Some(letters) = self.prompt_line("أدخل الجذر (enter root): ") else {
            return;
        };
        if self.patterns.is_empty() {
            self.console.warning("لا توجد أوزان محملة في النظام");
            return;
        }

        let parsed;
        let root = if let Some(stored) = self.roots.find(&letters) {
            stored
        } else {
            match Root::new(&letters) {
                Ok(fresh) => {
                    parsed = fresh;
                    &parsed
                }
                Err(error) => {
                    self.console.error(&error.to_string());
                    return;
                }
            }
        };

        let all = self.patterns.all();
        let words = self.generator.generate_all(root, &all);

        self.console.header(&format!("مشتقات الجذر {}", root.letters()));
        for word in &words {
            self.console
                .item(&format!("{} (وزن {})", word.word(), word.pattern_id()));
        }
        self.console.rule();
        self.console
            .plain(&format!("المجموع (total): {}", words.len()));
    }

    // =========================================================================
    // Validation actions
    // =========================================================================

    fn validate_word(&self) {
        let Some(word) = self.prompt_line("أدخل الكلمة (enter word): ") else {
            return;
        };
        let Some(root_text) = self.prompt_line("أدخل الجذر (enter root): ") else {
            return;
        };
        let analyzer = Analyzer::new(&self.roots, &self.patterns);
        self.report(&analyzer.validate_word(&word, &root_text));
    }

    fn identify_word(&self) {
        let Some(word) = self.prompt_line("أدخل الكلمة (enter word): ") else {
            return;
        };
        let analyzer = Analyzer::new(&self.roots, &self.patterns);
        self.report(&analyzer.identify_word(&word));
    }

    fn report(&self, result: &ValidationResult) {
        if result.is_valid() {
            self.console.success(result.explanation());
        } else {
            self.console.error(result.explanation());
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    fn show_statistics(&self) {
        let stats = Statistics::gather(&self.roots, &self.patterns, &self.generator);
        self.console.header("الإحصائيات (statistics)");
        for line in stats.to_string().lines() {
            self.console.item(line);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", None)]
    #[case("فاعل", Some("فاعل"))]
    fn non_empty_maps_blank_input_to_keep_current(
        #[case] text: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(non_empty(text), expected);
    }
}
