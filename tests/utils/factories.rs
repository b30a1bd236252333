/// Test data factories using builder pattern
///
/// Builds import files row by row with sensible defaults
pub struct CsvFactory {
    rows: Vec<String>,
}

impl CsvFactory {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn student(mut self, first_name: &str) -> Self {
        self.rows.push(format!(
            "student,{},Kowalska,01234567890,165.5,55,{}@example.com,Warsaw University,2,Physics,1200",
            first_name,
            first_name.to_lowercase()
        ));
        self
    }

    pub fn employee(mut self, first_name: &str) -> Self {
        self.rows.push(format!(
            "employee,{},Nowak,85010112345,180,80,{}@example.com,Engineer,9000.50,2019-06-01",
            first_name,
            first_name.to_lowercase()
        ));
        self
    }

    pub fn pensioner(mut self, first_name: &str) -> Self {
        self.rows.push(format!(
            "pensioner,{},Lis,40010112345,158,62,{}@example.com,2300,41",
            first_name,
            first_name.to_lowercase()
        ));
        self
    }

    /// A pensioner whose pension is not a number
    pub fn malformed(mut self, first_name: &str) -> Self {
        self.rows.push(format!(
            "pensioner,{},Lis,40010112345,158,62,{}@example.com,plenty,41",
            first_name,
            first_name.to_lowercase()
        ));
        self
    }

    pub fn unknown_type(mut self) -> Self {
        self.rows.push("robot,R2,D2".to_string());
        self
    }

    pub fn blank(mut self) -> Self {
        self.rows.push(String::new());
        self
    }

    /// `count` well-formed rows cycling through the three person types
    pub fn mixed(mut self, count: usize) -> Self {
        for i in 0..count {
            let name = format!("Person{}", i);
            self = match i % 3 {
                0 => self.student(&name),
                1 => self.employee(&name),
                _ => self.pensioner(&name),
            };
        }
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut file = self.rows.join("\n");
        file.push('\n');
        file.into_bytes()
    }
}

impl Default for CsvFactory {
    fn default() -> Self {
        Self::new()
    }
}
