#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Title,
    BulletList,
    TimelineMap,
    CallToAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointIcon {
    Money,
    Travel,
    Code,
    Rocket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub icon: CheckpointIcon,
    pub heading: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Empty,
    /// Newline separated bullet points
    Lines(&'static str),
    Checkpoints(&'static [Checkpoint]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub template: TemplateKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub body: Body,
    pub footnote: Option<&'static str>,
    pub backdrop: &'static str,
}

impl Slide {
    pub fn bullets(&self) -> Vec<&'static str> {
        match self.body {
            Body::Lines(text) => text
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn checkpoints(&self) -> &'static [Checkpoint] {
        match self.body {
            Body::Checkpoints(checkpoints) => checkpoints,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLANK: Slide = Slide {
        id: 1,
        template: TemplateKind::BulletList,
        title: "",
        subtitle: "",
        tagline: "",
        body: Body::Empty,
        footnote: None,
        backdrop: "",
    };

    #[test]
    fn test_bullets_skip_blank_lines() {
        let slide = Slide {
            body: Body::Lines("first \n second\n \n third\n "),
            ..BLANK
        };
        assert_eq!(slide.bullets(), vec!["first", "second", "third"]);
        assert!(slide.checkpoints().is_empty());
    }

    #[test]
    fn test_empty_body() {
        assert!(BLANK.bullets().is_empty());
        assert!(BLANK.checkpoints().is_empty());
    }
}
