use crate::domain::{
    board::{BoardConfig, BucketBy, Column, ColumnOrder},
    candidate::Candidate,
    stage::Stage,
};

/// Buckets candidates into one column per stage
///
/// Every stage yields exactly one column. A candidate lands in the column
/// whose key matches (see [`BucketBy`]) and in no column when nothing
/// matches. Candidates keep their input order within a column.
///
/// # Examples
/// ```
/// use recruit_kanban::domain::{project, BoardConfig, Candidate, Score, Stage, StageId};
///
/// let stages = vec![
///     Stage::new("new", "Nuevos", "#3498db", 0),
///     Stage::new("hr", "Entrevista RRHH", "#e74c3c", 1),
/// ];
/// let candidates = vec![
///     Candidate::new("1", "John Doe", Score::new(2).unwrap(), 1)
///         .in_stage(StageId::new("new"), "Nuevos"),
/// ];
///
/// let columns = project(&stages, &candidates, &BoardConfig::default());
/// assert_eq!(columns[0].candidates.len(), 1);
/// assert!(columns[1].candidates.is_empty());
/// ```
pub fn project(stages: &[Stage], candidates: &[Candidate], config: &BoardConfig) -> Vec<Column> {
    let mut columns: Vec<Column> = stages
        .iter()
        .map(|stage| {
            let mut column = Column::for_stage(stage);
            column.candidates = candidates
                .iter()
                .filter(|c| matches_stage(c, stage, config.bucket_by))
                .map(|c| match config.bucket_by {
                    // The label is derived from the stage once bucketed by id
                    BucketBy::StageId => c.clone().in_stage(stage.id.clone(), stage.name.clone()),
                    BucketBy::StepLabel => c.clone(),
                })
                .collect();
            column
        })
        .collect();

    if config.column_order == ColumnOrder::StageOrder {
        columns.sort_by_key(|col| col.order);
    }

    columns
}

fn matches_stage(candidate: &Candidate, stage: &Stage, bucket_by: BucketBy) -> bool {
    match bucket_by {
        BucketBy::StageId => candidate.status == stage.id,
        BucketBy::StepLabel => candidate.current_interview_step == stage.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{candidate::Score, stage::StageId};

    fn stages() -> Vec<Stage> {
        vec![
            Stage::new("new", "Nuevos", "#3498db", 0),
            Stage::new("technical", "Entrevista Técnica", "#2ecc71", 1),
            Stage::new("hr", "Entrevista RRHH", "#e74c3c", 2),
            Stage::new("offer", "Oferta", "#f1c40f", 3),
        ]
    }

    fn candidate(id: &str, status: &str, step: &str) -> Candidate {
        Candidate::new(id, format!("Candidate {}", id), Score::new(3).unwrap(), 1)
            .in_stage(StageId::new(status), step)
    }

    fn id_config() -> BoardConfig {
        BoardConfig {
            bucket_by: BucketBy::StageId,
            column_order: ColumnOrder::SourceOrder,
        }
    }

    fn sorted_config() -> BoardConfig {
        BoardConfig {
            column_order: ColumnOrder::StageOrder,
            ..BoardConfig::default()
        }
    }

    fn count_occurrences(columns: &[Column], candidate: &Candidate) -> usize {
        columns
            .iter()
            .filter(|col| col.contains(&candidate.id))
            .count()
    }

    fn column_ids(columns: &[Column]) -> Vec<&str> {
        columns.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_one_column_per_stage() {
        let columns = project(&stages(), &[], &BoardConfig::default());

        assert_eq!(columns.len(), 4);
        assert!(columns.iter().all(Column::is_empty));
        assert_eq!(columns[2].title, "Entrevista RRHH");
        assert_eq!(columns[2].color, "#e74c3c");
    }

    #[test]
    fn test_empty_inputs() {
        let candidates = [candidate("1", "new", "Nuevos")];
        assert!(project(&[], &candidates, &BoardConfig::default()).is_empty());
    }

    #[test]
    fn test_default_config_buckets_by_step_label() {
        let candidates = vec![
            candidate("1", "new", "Nuevos"),
            candidate("2", "technical", "Entrevista Técnica"),
            candidate("3", "new", "Nuevos"),
            candidate("4", "offer", "Unknown step"),
            // Label matches even though the status is stale
            candidate("5", "archived", "Nuevos"),
        ];

        let columns = project(&stages(), &candidates, &BoardConfig::default());

        assert_eq!(columns[0].len(), 3);
        assert_eq!(columns[1].len(), 1);
        assert_eq!(columns[3].len(), 0);
        for c in candidates.iter().filter(|c| c.id.as_str() != "4") {
            assert_eq!(count_occurrences(&columns, c), 1);
        }
        assert_eq!(count_occurrences(&columns, &candidates[3]), 0);
    }

    #[test]
    fn test_label_bucketing_keeps_candidates_untouched() {
        let candidates = vec![candidate("5", "archived", "Nuevos")];

        let columns = project(&stages(), &candidates, &BoardConfig::default());
        assert_eq!(columns[0].candidates[0], candidates[0]);
    }

    #[test]
    fn test_bucketing_by_stage_id_derives_label() {
        let candidates = vec![
            candidate("1", "hr", "stale label"),
            candidate("2", "archived", "Nuevos"),
        ];

        let columns = project(&stages(), &candidates, &id_config());

        let hr = &columns[2];
        assert_eq!(hr.len(), 1);
        assert_eq!(hr.candidates[0].current_interview_step, "Entrevista RRHH");
        assert_eq!(count_occurrences(&columns, &candidates[1]), 0);
    }

    #[test]
    fn test_candidate_order_is_preserved() {
        let candidates = vec![
            candidate("b", "new", "Nuevos"),
            candidate("a", "new", "Nuevos"),
            candidate("c", "new", "Nuevos"),
        ];

        let columns = project(&stages(), &candidates, &BoardConfig::default());
        let ids: Vec<&str> = columns[0].candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_default_config_keeps_source_order() {
        let stages = vec![
            Stage::new("hr", "Entrevista RRHH", "#e74c3c", 2),
            Stage::new("new", "Nuevos", "#3498db", 0),
        ];

        let columns = project(&stages, &[], &BoardConfig::default());
        assert_eq!(column_ids(&columns), vec!["hr", "new"]);
    }

    #[test]
    fn test_columns_sorted_by_stage_order_when_configured() {
        let mut shuffled = stages();
        shuffled.reverse();

        let columns = project(&shuffled, &[], &sorted_config());
        assert_eq!(column_ids(&columns), vec!["new", "technical", "hr", "offer"]);
    }

    #[test]
    fn test_equal_order_keeps_source_order() {
        let stages = vec![
            Stage::new("b", "B", "#000", 1),
            Stage::new("a", "A", "#000", 1),
            Stage::new("z", "Z", "#000", 0),
        ];

        let columns = project(&stages, &[], &sorted_config());
        assert_eq!(column_ids(&columns), vec!["z", "b", "a"]);
    }
}
