use crate::element::CanvasItemId;

/// Monotonically increasing id source, starting at 1
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: CanvasItemId,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn generate_id(&mut self) -> CanvasItemId {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.generate_id(), 1);
        assert_eq!(ids.generate_id(), 2);
    }
}
