#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    depth: usize,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, depth: usize) -> Self {
        Self { name, group, depth }
    }

    pub fn small(name: &'static str, depth: usize) -> Self {
        Self::new(name, TestGroup::Small, depth)
    }

    pub fn normal(name: &'static str, depth: usize) -> Self {
        Self::new(name, TestGroup::Normal, depth)
    }

    pub fn large(name: &'static str, depth: usize) -> Self {
        Self::new(name, TestGroup::Large, depth)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    /// number of add-ons wrapped around the base component
    pub fn depth(&self) -> usize {
        self.depth
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}

impl TestGroup {
    pub fn label(self) -> &'static str {
        match self {
            TestGroup::Small => "small",
            TestGroup::Normal => "normal",
            TestGroup::Large => "large",
        }
    }
}
