use crate::core::scoring::{candidate_document, opportunity_document, overlap_score};
use crate::core::tokenizer::tokenize_and_stem;
use crate::error::EngineError;
use crate::models::{MatchResult, OpportunityRecord, ParsedProfile, RankingPolicy, SkillSet};

/// Outcome of ranking a catalog against one profile
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub recommendations: Vec<MatchResult>,
    /// Normalized score of the top result, 0 when nothing qualified
    pub match_score: u32,
    pub missing_skills: Vec<String>,
    /// Merged candidate skill set the ranking was computed from
    pub skills: SkillSet,
    pub total_candidates: usize,
}

/// Ranks opportunities against a candidate profile
///
/// # Pipeline Stages
/// 1. Merge supplied skills into the profile
/// 2. Score every opportunity
/// 3. Threshold, stable sort, truncate
/// 4. Normalize against the top score
/// 5. Derive the missing-skills delta
#[derive(Debug, Clone)]
pub struct Recommender {
    policy: RankingPolicy,
}

impl Recommender {
    pub fn new(policy: RankingPolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self {
            policy: RankingPolicy::default(),
        }
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Rank `catalog` against `profile` merged with `candidate_skills`.
    ///
    /// Fails with `NoSkillsDetected` when the merged skill set is empty.
    pub fn recommend<S: AsRef<str>>(
        &self,
        profile: &ParsedProfile,
        candidate_skills: &[S],
        catalog: &[OpportunityRecord],
    ) -> Result<Recommendation, EngineError> {
        let merged = profile.with_merged_skills(candidate_skills);
        if merged.skills.is_empty() {
            return Err(EngineError::NoSkillsDetected);
        }

        // the candidate side is shared by every opportunity
        let candidate = tokenize_and_stem(&candidate_document(&merged));

        let mut scored: Vec<(f64, &OpportunityRecord)> = catalog
            .iter()
            .filter_map(|opportunity| {
                let score = overlap_score(&candidate, &tokenize_and_stem(&opportunity_document(opportunity)));
                (score > self.policy.min_score).then_some((score, opportunity))
            })
            .collect();

        // sort_by is stable, so equal scores keep catalog order
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.policy.max_results);

        let max_score = scored.first().map(|(score, _)| *score).unwrap_or(1.0);

        let recommendations: Vec<MatchResult> = scored
            .into_iter()
            .map(|(raw_score, opportunity)| MatchResult {
                opportunity: opportunity.clone(),
                raw_score,
                normalized_score: normalize(raw_score, max_score),
            })
            .collect();

        let missing_skills = missing_skills(
            &recommendations,
            &merged.skills,
            self.policy.max_missing_skills,
        );
        let match_score = recommendations
            .first()
            .map(|top| top.normalized_score)
            .unwrap_or(0);

        tracing::debug!(
            "Ranked {} of {} opportunities, {} missing skills",
            recommendations.len(),
            catalog.len(),
            missing_skills.len()
        );

        Ok(Recommendation {
            recommendations,
            match_score,
            missing_skills,
            skills: merged.skills,
            total_candidates: catalog.len(),
        })
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_policy()
    }
}

#[inline]
fn normalize(raw_score: f64, max_score: f64) -> u32 {
    if max_score <= 0.0 {
        return 0;
    }
    (raw_score / max_score * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Skills listed on the ranked opportunities that the candidate lacks, in
/// encounter order, deduplicated case-insensitively
fn missing_skills(results: &[MatchResult], have: &SkillSet, limit: usize) -> Vec<String> {
    let mut missing = SkillSet::new();

    for skill in results.iter().flat_map(|r| r.opportunity.skills.iter()) {
        if missing.len() >= limit {
            break;
        }
        let skill = skill.trim();
        if !have.contains(skill) {
            missing.insert(skill.to_string());
        }
    }

    missing.into()
}
