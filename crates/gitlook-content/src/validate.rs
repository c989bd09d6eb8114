//! Best-effort checks over a loaded curriculum.
//!
//! The renderer tolerates every problem reported here: it drops relations
//! whose endpoints do not resolve and draws a placeholder for unknown scene
//! kinds. The validator exists so authors hear about those silent drops.
//! Every diagnostic it produces is a [`Severity::Warning`](crate::error::Severity::Warning).

use std::collections::HashMap;

use gitlook_core::{
    lesson::{Curriculum, LessonModule, Quiz},
    scene::{
        AreasScene, BranchesScene, ProcessScene, Relation, SceneDescription, WorkflowScene,
    },
};

use crate::{
    Span,
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
};

/// Validates a curriculum without source text; diagnostics carry paths only.
pub fn validate(curriculum: &Curriculum) -> Vec<Diagnostic> {
    Validator::new(None).run(curriculum)
}

/// Validates a curriculum loaded from `source`, attaching labeled spans.
///
/// Spans are located by searching the source for the offending string after
/// the enclosing animation's id, so they point at the right place for
/// ordinary hand-written files but may land on an earlier occurrence when
/// the same string appears repeatedly.
pub fn validate_with_source(curriculum: &Curriculum, source: &str) -> Vec<Diagnostic> {
    Validator::new(Some(source)).run(curriculum)
}

struct Validator<'a> {
    source: Option<&'a str>,
    collector: DiagnosticCollector,
}

impl<'a> Validator<'a> {
    fn new(source: Option<&'a str>) -> Self {
        Self {
            source,
            collector: DiagnosticCollector::new(),
        }
    }

    fn run(mut self, curriculum: &Curriculum) -> Vec<Diagnostic> {
        for (index, module) in curriculum.modules.iter().enumerate() {
            self.check_module(&format!("modules[{index}]"), module);
        }
        self.collector.finish()
    }

    /// Byte offset to start searching from for anything inside `anchor`.
    fn anchor_offset(&self, anchor: &str) -> usize {
        self.source
            .and_then(|source| Span::find_string(source, anchor, 0))
            .map_or(0, |span| span.end())
    }

    fn locate(&self, value: &str, from: usize) -> Option<Span> {
        self.source
            .and_then(|source| Span::find_string(source, value, from))
    }

    fn emit(&mut self, diagnostic: Diagnostic, located: Option<(&str, usize, &str)>) {
        let diagnostic = match located.and_then(|(value, from, label)| {
            self.locate(value, from).map(|span| (span, label))
        }) {
            Some((span, label)) => diagnostic.with_label(span, label),
            None => diagnostic,
        };
        self.collector.emit(diagnostic);
    }

    fn check_module(&mut self, path: &str, module: &LessonModule) {
        let module_offset = self.anchor_offset(&module.id);

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, animation) in module.animations.iter().enumerate() {
            let animation_path = format!("{path}.animations[{index}]");
            if let Some(first) = seen.insert(&animation.id, index) {
                let diagnostic = Diagnostic::warning(format!(
                    "animation id `{}` is used twice in module `{}`",
                    animation.id, module.id
                ))
                .with_code(ErrorCode::E205)
                .with_path(format!("{animation_path}.id"))
                .with_help(format!(
                    "both animations would mount into `{}`; the first index was {first}",
                    animation.canvas_id()
                ));
                self.collector.emit(diagnostic);
            }

            let offset = self
                .locate(&animation.id, module_offset)
                .map_or(module_offset, |span| span.end());
            self.check_scene(
                &format!("{animation_path}.animationData"),
                &animation.id,
                offset,
                &animation.animation_data,
            );
        }

        if let Some(quiz) = &module.quiz {
            self.check_quiz(&format!("{path}.quiz"), quiz, module_offset);
        }
    }

    fn check_scene(&mut self, path: &str, animation_id: &str, offset: usize, scene: &SceneDescription) {
        self.check_duplicate_ids(path, animation_id, offset, scene);

        match scene {
            SceneDescription::Workflow(scene) => self.check_workflow(path, offset, scene),
            SceneDescription::Areas(scene) => self.check_areas(path, offset, scene),
            SceneDescription::Branches(scene) => self.check_branches(path, offset, scene),
            SceneDescription::Process(scene) => self.check_process(path, offset, scene),
            SceneDescription::Comparison(_) => {}
            SceneDescription::Unsupported => {
                let diagnostic = Diagnostic::warning(format!(
                    "animation `{animation_id}` has an unsupported scene type"
                ))
                .with_code(ErrorCode::E202)
                .with_path(format!("{path}.type"))
                .with_help(
                    "use one of `workflow`, `areas`, `branches`, `process` or `comparison`; \
                     a placeholder is shown instead",
                );
                self.collector.emit(diagnostic);
            }
        }
    }

    fn check_duplicate_ids(
        &mut self,
        path: &str,
        animation_id: &str,
        offset: usize,
        scene: &SceneDescription,
    ) {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, id) in scene.element_ids().into_iter().enumerate() {
            if seen.insert(id, index).is_none() {
                continue;
            }
            let first = self.locate(id, offset);
            let second = first.and_then(|span| self.locate(id, span.end()));

            let mut diagnostic = Diagnostic::warning(format!(
                "element id `{id}` is declared twice in animation `{animation_id}`"
            ))
            .with_code(ErrorCode::E201)
            .with_path(path)
            .with_help("highlights only reach the first element with this id");
            if let (Some(first), Some(second)) = (first, second) {
                diagnostic = diagnostic
                    .with_label(second, "declared again here")
                    .with_secondary_label(first, "first declared here");
            }
            self.collector.emit(diagnostic);
        }
    }

    fn check_relations<R: Relation>(
        &mut self,
        path: &str,
        offset: usize,
        element: &str,
        relations: &[R],
        resolves: impl Fn(&str) -> bool,
    ) {
        for (index, relation) in relations.iter().enumerate() {
            for (field, id) in [("from", relation.from()), ("to", relation.to())] {
                if resolves(id) {
                    continue;
                }
                let diagnostic = Diagnostic::warning(format!(
                    "relation {field} `{id}` is not a {element} of this scene"
                ))
                .with_code(ErrorCode::E200)
                .with_path(format!("{path}[{index}].{field}"))
                .with_help(format!(
                    "declare a {element} with id `{id}` or fix the reference; the relation is not drawn"
                ));
                self.emit(diagnostic, Some((id, offset, "unknown id")));
            }
        }
    }

    fn check_workflow(&mut self, path: &str, offset: usize, scene: &WorkflowScene) {
        self.check_relations(
            &format!("{path}.connections"),
            offset,
            "step",
            &scene.connections,
            |id| scene.step(id).is_some(),
        );
    }

    fn check_areas(&mut self, path: &str, offset: usize, scene: &AreasScene) {
        self.check_relations(
            &format!("{path}.flows"),
            offset,
            "area",
            &scene.flows,
            |id| scene.area(id).is_some(),
        );
    }

    fn check_process(&mut self, path: &str, offset: usize, scene: &ProcessScene) {
        self.check_relations(
            &format!("{path}.transitions"),
            offset,
            "stage",
            &scene.transitions,
            |id| scene.stage(id).is_some(),
        );
    }

    fn check_branches(&mut self, path: &str, offset: usize, scene: &BranchesScene) {
        for (index, branch) in scene.branches.iter().enumerate() {
            let branch_path = format!("{path}.branches[{index}]");

            if scene.main_commit(&branch.start_from).is_none() {
                let diagnostic = Diagnostic::warning(format!(
                    "branch `{}` starts from `{}`, which is not a main-line commit",
                    branch.name, branch.start_from
                ))
                .with_code(ErrorCode::E203)
                .with_path(format!("{branch_path}.startFrom"))
                .with_help("the branch line and name are not drawn");
                self.emit(
                    diagnostic,
                    Some((&branch.start_from, offset, "unknown commit")),
                );
            }

            if let Some(target) = &branch.merge_into
                && scene.main_commit(target).is_none()
            {
                let diagnostic = Diagnostic::warning(format!(
                    "branch `{}` merges into `{target}`, which is not a main-line commit",
                    branch.name
                ))
                .with_code(ErrorCode::E204)
                .with_path(format!("{branch_path}.mergeInto"))
                .with_help("the branch line stops at its last commit");
                self.emit(diagnostic, Some((target, offset, "unknown commit")));
            }
        }
    }

    fn check_quiz(&mut self, path: &str, quiz: &Quiz, offset: usize) {
        for (index, question) in quiz.questions.iter().enumerate() {
            if question
                .options
                .iter()
                .any(|option| option.id == question.correct_answer)
            {
                continue;
            }
            let diagnostic = Diagnostic::warning(format!(
                "question `{}` names `{}` as correct, but has no such option",
                question.id, question.correct_answer
            ))
            .with_code(ErrorCode::E206)
            .with_path(format!("{path}.questions[{index}].correctAnswer"))
            .with_help("the question cannot be answered correctly");
            self.emit(
                diagnostic,
                Some((&question.correct_answer, offset, "no option with this id")),
            );
        }
    }
}
