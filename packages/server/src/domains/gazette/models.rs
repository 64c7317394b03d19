use indexmap::IndexMap;

/// One publication row from the daily index.
#[derive(Debug, Clone, PartialEq)]
pub struct Publication {
    pub title: String,
    pub url: String,
    pub department: String,
}

/// The daily index grouped by issuing department.
///
/// Departments keep insertion order; publications within a department keep
/// document order. Built once per run and read-only afterwards.
#[derive(Debug, Default)]
pub struct GazetteIndex {
    departments: IndexMap<String, Vec<Publication>>,
}

impl GazetteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, publication: Publication) {
        self.departments
            .entry(publication.department.clone())
            .or_default()
            .push(publication);
    }

    /// Publications for a department. An absent department is an empty day,
    /// not an error.
    pub fn department(&self, name: &str) -> &[Publication] {
        self.departments
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn department_names(&self) -> impl Iterator<Item = &str> {
        self.departments.keys().map(String::as_str)
    }

    /// Total number of publications across departments.
    pub fn len(&self) -> usize {
        self.departments.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publication(title: &str, department: &str) -> Publication {
        Publication {
            title: title.to_string(),
            url: format!("https://www.dof.gob.mx/nota_detalle.php?codigo={}", title),
            department: department.to_string(),
        }
    }

    #[test]
    fn test_absent_department_is_empty_not_a_fault() {
        let index = GazetteIndex::new();
        assert!(index.department("BANCO DE MEXICO").is_empty());
    }

    #[test]
    fn test_document_order_preserved_within_department() {
        let mut index = GazetteIndex::new();
        index.push(publication("a", "BANCO DE MEXICO"));
        index.push(publication("b", "BANCO DE MEXICO"));

        let titles: Vec<&str> = index
            .department("BANCO DE MEXICO")
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "b"]);
    }
}
