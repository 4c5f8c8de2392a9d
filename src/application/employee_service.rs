use crate::{
    domain::{
        employee::{Employee, NewEmployee},
        errors::DomainError,
    },
    infrastructure::DynRepository,
};

pub struct EmployeeService {
    repository: DynRepository<Employee>,
}

impl EmployeeService {
    pub fn new(repository: DynRepository<Employee>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, DomainError> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: u64) -> Result<Employee, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Could not find employee {id}")))
    }

    pub async fn create(&self, fields: NewEmployee) -> Result<Employee, DomainError> {
        self.repository.save(Employee::new(fields)).await
    }

    /// Replace-or-create at a caller-chosen id: an existing employee keeps
    /// its identity and gets the name fields and role overwritten; a missing
    /// one is stored as a new record under the path id.
    pub async fn upsert(&self, id: u64, fields: NewEmployee) -> Result<Employee, DomainError> {
        let employee = match self.repository.find_by_id(id).await? {
            Some(mut employee) => {
                employee.update_from(fields);
                employee
            }
            None => {
                let mut employee = Employee::new(fields);
                employee.id = Some(id);
                employee
            }
        };

        self.repository.save(employee).await
    }

    /// No existence check: deleting an absent id is a silent success.
    pub async fn delete(&self, id: u64) -> Result<(), DomainError> {
        self.repository.delete_by_id(id).await
    }
}
