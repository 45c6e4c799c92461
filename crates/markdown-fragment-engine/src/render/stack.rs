/// One open construct: the tag it emitted and the nesting level it was
/// opened at (count of `>` for quotes, leading whitespace for lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<T> {
    pub tag: T,
    pub level: usize,
}

/// Stack of open constructs shared by the nesting-aware block stages.
///
/// Tag and level are pushed and popped together, so the two never drift
/// apart.
#[derive(Debug, Clone)]
pub struct ConstructStack<T> {
    frames: Vec<Frame<T>>,
}

impl<T: Copy> ConstructStack<T> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn push(&mut self, tag: T, level: usize) {
        self.frames.push(Frame { tag, level });
    }

    pub fn pop(&mut self) -> Option<Frame<T>> {
        self.frames.pop()
    }

    pub fn top(&self) -> Option<Frame<T>> {
        self.frames.last().copied()
    }

    /// Level of the innermost open construct.
    pub fn top_level(&self) -> Option<usize> {
        self.top().map(|f| f.level)
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Pops frames while `pred` holds for the top, returning them innermost
    /// first.
    pub fn pop_while(&mut self, mut pred: impl FnMut(Frame<T>) -> bool) -> Vec<Frame<T>> {
        let mut popped = Vec::new();
        while let Some(top) = self.top() {
            if !pred(top) {
                break;
            }
            self.frames.pop();
            popped.push(top);
        }
        popped
    }

    /// Pops every frame, innermost first.
    pub fn drain(&mut self) -> Vec<Frame<T>> {
        self.pop_while(|_| true)
    }
}

impl<T: Copy> Default for ConstructStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_keep_tag_and_level_together() {
        let mut stack = ConstructStack::new();
        stack.push("ul", 0);
        stack.push("ol", 2);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top_level(), Some(2));
        assert_eq!(stack.pop(), Some(Frame { tag: "ol", level: 2 }));
        assert_eq!(stack.top(), Some(Frame { tag: "ul", level: 0 }));
    }

    #[test]
    fn pop_while_stops_at_first_non_matching_frame() {
        let mut stack = ConstructStack::new();
        stack.push("ul", 0);
        stack.push("ul", 2);
        stack.push("ul", 4);
        let popped = stack.pop_while(|f| f.level > 1);
        assert_eq!(popped.iter().map(|f| f.level).collect::<Vec<_>>(), vec![4, 2]);
        assert_eq!(stack.top_level(), Some(0));
    }

    #[test]
    fn drain_empties_the_stack_lifo() {
        let mut stack = ConstructStack::new();
        stack.push('a', 1);
        stack.push('b', 2);
        let tags: Vec<char> = stack.drain().into_iter().map(|f| f.tag).collect();
        assert_eq!(tags, vec!['b', 'a']);
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
    }
}
