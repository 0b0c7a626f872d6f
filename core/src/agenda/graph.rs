use crate::error::AgendaError;

use super::registry::TaskRegistry;
use super::task::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Finished,
}

/// Read-only view of the dependency graph stored in a [`TaskRegistry`].
///
/// Edges point from a task to its prerequisites.
#[derive(Debug, Clone, Copy)]
pub struct TaskGraph<'a> {
    registry: &'a TaskRegistry,
}

impl<'a> TaskGraph<'a> {
    pub fn new(registry: &'a TaskRegistry) -> Self {
        Self { registry }
    }

    pub fn prerequisites(&self, id: TaskId) -> &'a [TaskId] {
        &self.registry.get(id).dependencies
    }

    /// Check that every task, including pure dependency placeholders, has been defined.
    pub fn validate(&self) -> Result<(), AgendaError> {
        match self.registry.iter().find(|(_, task)| !task.initialized) {
            Some((id, _)) => Err(AgendaError::UndefinedTask {
                task: self.registry.display_name(id),
                referenced_by: self.first_dependent(id),
            }),
            None => Ok(()),
        }
    }

    /// Order every task so that each prerequisite comes before the tasks depending on it.
    ///
    /// Depth-first over tasks in registration order with an explicit work stack, so long
    /// dependency chains do not grow the call stack. Meeting a task that is still in
    /// progress means the graph has a cycle; the error carries the path from the stack.
    ///
    /// # Time Complexity
    ///
    /// O(V + E) where V = number of tasks, E = number of dependencies
    pub fn topological_sort(&self) -> Result<Vec<TaskId>, AgendaError> {
        self.validate()?;

        let mut marks = vec![Mark::Unvisited; self.registry.len()];
        let mut sequence = Vec::with_capacity(self.registry.len());
        // (task, index of the next prerequisite to visit)
        let mut stack: Vec<(TaskId, usize)> = Vec::new();

        for root in self.registry.ids() {
            if marks[root.index()] != Mark::Unvisited {
                continue;
            }
            marks[root.index()] = Mark::InProgress;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (task, next) = *frame;
                match self.prerequisites(task).get(next).copied() {
                    Some(dep) => {
                        frame.1 += 1;
                        match marks[dep.index()] {
                            Mark::Unvisited => {
                                marks[dep.index()] = Mark::InProgress;
                                stack.push((dep, 0));
                            }
                            Mark::InProgress => return Err(self.cycle_error(&stack, dep)),
                            Mark::Finished => {}
                        }
                    }
                    None => {
                        marks[task.index()] = Mark::Finished;
                        sequence.push(task);
                        stack.pop();
                    }
                }
            }
        }

        tracing::debug!(tasks = sequence.len(), "topological sequence built");
        Ok(sequence)
    }

    fn cycle_error(&self, stack: &[(TaskId, usize)], reentered: TaskId) -> AgendaError {
        let start = stack
            .iter()
            .position(|(id, _)| *id == reentered)
            .unwrap_or(0);
        let mut cycle: Vec<String> = stack[start..]
            .iter()
            .map(|(id, _)| self.registry.display_name(*id))
            .collect();
        cycle.push(self.registry.display_name(reentered));

        AgendaError::CyclicDependency {
            task: self.registry.display_name(reentered),
            cycle,
        }
    }

    fn first_dependent(&self, id: TaskId) -> Option<String> {
        self.registry
            .iter()
            .find(|(_, task)| task.dependencies.contains(&id))
            .map(|(dependent, _)| self.registry.display_name(dependent))
    }
}
