//! Correlation Engine - weighted affinity scores between the DISC profile
//! and career anchors, strengths, and appreciation languages.

use crate::domain::devolutiva::DevolutivaData;
use crate::domain::profile::{DiscProfile, DominantProfile, SkillKind};

use super::{CorrelationResult, Correlations};

/// Engine computing the three fixed correlation groups.
///
/// Stateless: every operation is a pure function of its inputs.
pub struct CorrelationEngine;

impl CorrelationEngine {
    /// Runs all three correlation groups over a complete devolutiva record.
    pub fn complete_insights(data: &DevolutivaData) -> Correlations {
        Correlations {
            disc_with_anchors: Self::correlate_with_anchors(
                &data.disc_profile,
                data.dominant_profile,
            ),
            disc_with_strengths: Self::correlate_with_strengths(
                &data.disc_profile,
                data.dominant_profile,
            ),
            disc_with_languages: Self::correlate_with_languages(
                &data.disc_profile,
                data.dominant_profile,
            ),
        }
    }

    /// Correlates the DISC profile with career anchors: one banded score per
    /// axis plus an overall alignment averaging the four.
    pub fn correlate_with_anchors(
        profile: &DiscProfile,
        dominant: DominantProfile,
    ) -> Vec<CorrelationResult> {
        let d_score = Self::banded(profile.d(), 0.9, 0.7, 0.4);
        let i_score = Self::banded(profile.i(), 0.85, 0.65, 0.35);
        let s_score = Self::banded(profile.s(), 0.9, 0.7, 0.4);
        let c_score = Self::banded(profile.c(), 0.9, 0.75, 0.45);

        let mut correlations = vec![
            CorrelationResult::new(
                "D Profile → Entrepreneurial Anchor",
                d_score,
                vec![
                    "Your dominância drives entrepreneurial spirit".into(),
                    "Natural fit for roles requiring risk-taking and innovation".into(),
                    "Challenge: May struggle with conformity in structured roles".into(),
                ],
            ),
            CorrelationResult::new(
                "I Profile → Service/Helping Anchor",
                i_score,
                vec![
                    "Your influência supports helping and connecting with others".into(),
                    "Natural fit for client-facing or team-centric roles".into(),
                    "Challenge: May avoid purely technical or solitary work".into(),
                ],
            ),
            CorrelationResult::new(
                "S Profile → Security/Lifestyle Anchor",
                s_score,
                vec![
                    "Your estabilidade values steady growth and work-life balance".into(),
                    "Natural fit for organizations with clear expectations".into(),
                    "Challenge: May resist rapid change or high-risk ventures".into(),
                ],
            ),
            CorrelationResult::new(
                "C Profile → Technical/Expertise Anchor",
                c_score,
                vec![
                    "Your conformidade drives expertise and mastery".into(),
                    "Natural fit for technical, analytical, or specialist roles".into(),
                    "Challenge: May become too narrowly focused on expertise".into(),
                ],
            ),
        ];

        let overall = ((d_score + i_score + s_score + c_score) / 4.0 * 100.0).round() / 100.0;
        correlations.push(CorrelationResult::new(
            "Overall Anchor Alignment",
            overall,
            vec![
                Self::anchor_alignment_insight(dominant).into(),
                "Look for roles that allow you to express your natural style".into(),
                "Consider hybrid roles that balance your multiple strengths".into(),
            ],
        ));

        correlations
    }

    /// Correlates the DISC profile with four competency strengths, each a
    /// fixed weighted blend of all four axes.
    pub fn correlate_with_strengths(
        profile: &DiscProfile,
        dominant: DominantProfile,
    ) -> Vec<CorrelationResult> {
        let d = f64::from(profile.d());
        let i = f64::from(profile.i());
        let s = f64::from(profile.s());
        let c = f64::from(profile.c());

        vec![
            CorrelationResult::new(
                "Leadership Competency",
                (d * 0.6 + i * 0.3 + s * 0.05 + c * 0.05) / 100.0,
                vec![
                    "Your profile naturally supports leadership capabilities".into(),
                    format!(
                        "{} profiles typically excel at: {}",
                        dominant,
                        Self::leadership_strengths(dominant)
                    ),
                    "Development focus: Balance your natural style with complementary approaches"
                        .into(),
                ],
            ),
            CorrelationResult::new(
                "Communication Competency",
                (i * 0.5 + d * 0.2 + s * 0.2 + c * 0.1) / 100.0,
                vec![
                    "Your influência and interaction style create communication strengths".into(),
                    format!(
                        "{} communicates by: {}",
                        dominant,
                        Self::communication_style(dominant)
                    ),
                    "Challenge: Adapt your style to different audiences".into(),
                ],
            ),
            CorrelationResult::new(
                "Problem-Solving Competency",
                (c * 0.5 + d * 0.3 + i * 0.1 + s * 0.1) / 100.0,
                vec![
                    "Your analytical approach supports systematic problem-solving".into(),
                    format!(
                        "{} solves problems by: {}",
                        dominant,
                        Self::problem_solving_approach(dominant)
                    ),
                    "Strength: Combine your analysis with team input for best results".into(),
                ],
            ),
            CorrelationResult::new(
                "Teamwork Competency",
                (i * 0.4 + s * 0.4 + c * 0.1 + d * 0.1) / 100.0,
                vec![
                    "Your collaboration capacity depends on your I and S scores".into(),
                    format!(
                        "{} contributes to teams by: {}",
                        dominant,
                        Self::team_contribution(dominant)
                    ),
                    "Development: Strengthen appreciation for diverse team roles".into(),
                ],
            ),
        ]
    }

    /// Correlates the DISC profile with the five fixed appreciation
    /// languages: Recognition, Quality Time, Tangible Reward, Emotional
    /// Support, and Growth Opportunity.
    pub fn correlate_with_languages(
        profile: &DiscProfile,
        dominant: DominantProfile,
    ) -> Vec<CorrelationResult> {
        let d = f64::from(profile.d());
        let i = f64::from(profile.i());
        let s = f64::from(profile.s());

        vec![
            CorrelationResult::new(
                "Recognition Language Preference",
                // Higher for D and I (want visible recognition)
                (d * 0.5 + i * 0.5) / 100.0,
                vec![
                    "How you prefer to be recognized and appreciated".into(),
                    format!(
                        "{} prefers: {}",
                        dominant,
                        Self::recognition_preference(dominant)
                    ),
                    "Share these preferences with manager and colleagues".into(),
                ],
            ),
            CorrelationResult::new(
                "Quality Time Preference",
                // Higher for I and S (value connection)
                (i * 0.5 + s * 0.5) / 100.0,
                vec![
                    "How you prefer to spend meaningful time with others".into(),
                    format!(
                        "{} prefers: {}",
                        dominant,
                        Self::quality_time_preference(dominant)
                    ),
                    "Challenge: Balance your time preferences with team needs".into(),
                ],
            ),
            CorrelationResult::new(
                "Tangible Reward Preference",
                // Higher for D (drives results for reward)
                d / 100.0,
                vec![
                    "How motivated you are by concrete rewards and benefits".into(),
                    format!(
                        "{} is motivated by: {}",
                        dominant,
                        Self::tangible_reward_motivation(dominant)
                    ),
                    "Consider how to align rewards with your values".into(),
                ],
            ),
            CorrelationResult::new(
                "Emotional Support Preference",
                // Higher for I and S (need emotional support)
                i.max(s) / 100.0,
                vec![
                    "How much emotional support and empathy you need".into(),
                    format!(
                        "{} values: {}",
                        dominant,
                        Self::emotional_support_value(dominant)
                    ),
                    "Be explicit about your support needs with your team".into(),
                ],
            ),
            CorrelationResult::new(
                "Growth Opportunity Preference",
                // Higher for D and I (seek growth and new challenges)
                (d * 0.5 + i * 0.5) / 100.0,
                vec![
                    "How motivated you are by learning and development".into(),
                    format!(
                        "{} grows through: {}",
                        dominant,
                        Self::growth_opportunity_preference(dominant)
                    ),
                    "Seek roles that provide continuous learning aligned with your style".into(),
                ],
            ),
        ]
    }

    /// Renders all three correlation groups as a formatted percentage report.
    pub fn correlation_summary(correlations: &Correlations) -> String {
        let mut summary = String::from("# Correlation Analysis Summary\n\n");

        summary.push_str("## DISC ↔ Career Anchors\n");
        Self::push_group(&mut summary, &correlations.disc_with_anchors);
        summary.push('\n');

        summary.push_str("## DISC ↔ Strengths\n");
        Self::push_group(&mut summary, &correlations.disc_with_strengths);
        summary.push('\n');

        summary.push_str("## DISC ↔ Appreciation Languages\n");
        Self::push_group(&mut summary, &correlations.disc_with_languages);

        summary
    }

    /// Checks fixed cross-cutting conditions on the profile and core-skill
    /// count, emitting matching insight strings with a generic fallback.
    pub fn integration_opportunities(data: &DevolutivaData) -> Vec<String> {
        let profile = &data.disc_profile;
        let mut opportunities = Vec::new();

        if profile.d() > 60 && profile.s() > 60 {
            opportunities.push(
                "You combine decisive action with stability - ideal for transformational \
                 leadership that brings people along"
                    .to_string(),
            );
        }

        if profile.i() > 60 && profile.c() > 60 {
            opportunities.push(
                "You combine influence with accuracy - perfect for roles requiring both \
                 persuasion and technical credibility"
                    .to_string(),
            );
        }

        if profile.d() > 40 && profile.i() > 40 && profile.s() > 40 && profile.c() > 40 {
            opportunities.push(
                "Your balanced profile allows you to adapt across different situations and roles"
                    .to_string(),
            );
        }

        let core_skills = data
            .skills
            .iter()
            .filter(|skill| skill.kind == SkillKind::Core)
            .count();
        if core_skills >= 3 {
            opportunities.push(
                "Multiple core strengths suggest diverse opportunities - focus on roles \
                 integrating your top 2-3 strengths"
                    .to_string(),
            );
        }

        if opportunities.is_empty() {
            vec![
                "Review your DISC profile and career anchors to identify integration \
                 opportunities"
                    .to_string(),
            ]
        } else {
            opportunities
        }
    }

    fn push_group(summary: &mut String, group: &[CorrelationResult]) {
        for corr in group {
            summary.push_str(&format!(
                "**{}**: {:.0}%\n",
                corr.metric,
                corr.score * 100.0
            ));
            for insight in &corr.insights {
                summary.push_str(&format!("- {}\n", insight));
            }
        }
    }

    fn banded(value: u8, high: f64, mid: f64, low: f64) -> f64 {
        if value > 60 {
            high
        } else if value > 40 {
            mid
        } else {
            low
        }
    }

    fn anchor_alignment_insight(dominant: DominantProfile) -> &'static str {
        match dominant {
            DominantProfile::D => {
                "D profile naturally seeks entrepreneurial and challenge-driven roles"
            }
            DominantProfile::I => {
                "I profile naturally seeks people-focused and influencing roles"
            }
            DominantProfile::S => "S profile naturally seeks stability and team-oriented roles",
            DominantProfile::C => {
                "C profile naturally seeks expertise and quality-focused roles"
            }
        }
    }

    fn leadership_strengths(dominant: DominantProfile) -> &'static str {
        match dominant {
            DominantProfile::D => "decisive action, bold vision, driving results",
            DominantProfile::I => "inspiring others, creating enthusiasm, building coalitions",
            DominantProfile::S => "supporting team members, steady guidance, loyalty",
            DominantProfile::C => "strategic planning, quality standards, analytical direction",
        }
    }

    fn communication_style(dominant: DominantProfile) -> &'static str {
        match dominant {
            DominantProfile::D => "direct, concise, results-focused",
            DominantProfile::I => "engaging, enthusiastic, story-driven",
            DominantProfile::S => "gentle, listening-focused, supportive",
            DominantProfile::C => "precise, detailed, data-driven",
        }
    }

    fn problem_solving_approach(dominant: DominantProfile) -> &'static str {
        match dominant {
            DominantProfile::D => "quick decision-making, cutting through complexity",
            DominantProfile::I => "involving others, collaborative brainstorming",
            DominantProfile::S => "step-by-step analysis, risk-minimization",
            DominantProfile::C => "thorough investigation, systematic evaluation",
        }
    }

    fn team_contribution(dominant: DominantProfile) -> &'static str {
        match dominant {
            DominantProfile::D => "driving progress and challenging status quo",
            DominantProfile::I => "creating energy and connecting people",
            DominantProfile::S => "providing stability and supporting teammates",
            DominantProfile::C => "ensuring quality and attention to detail",
        }
    }

    fn recognition_preference(dominant: DominantProfile) -> &'static str {
        match dominant {
            DominantProfile::D => "public recognition of achievements and results",
            DominantProfile::I => "enthusiastic acknowledgment and celebration with others",
            DominantProfile::S => "quiet appreciation and personal thanks",
            DominantProfile::C => "specific feedback on quality and accuracy",
        }
    }

    fn quality_time_preference(dominant: DominantProfile) -> &'static str {
        match dominant {
            DominantProfile::D => "active, strategic conversations about goals",
            DominantProfile::I => "social events and group activities",
            DominantProfile::S => "one-on-one connection and support",
            DominantProfile::C => "focused work sessions and intellectual discussion",
        }
    }

    fn tangible_reward_motivation(dominant: DominantProfile) -> &'static str {
        match dominant {
            DominantProfile::D => "bonus, advancement, tangible success markers",
            DominantProfile::I => "benefits that enable experiences with others",
            DominantProfile::S => "stable compensation, job security",
            DominantProfile::C => "fair compensation matching effort and quality",
        }
    }

    fn emotional_support_value(dominant: DominantProfile) -> &'static str {
        match dominant {
            DominantProfile::D => "minimal but appreciates direct support",
            DominantProfile::I => "high - emotional connection and encouragement",
            DominantProfile::S => "high - steady reassurance and validation",
            DominantProfile::C => "moderate - prefers practical support",
        }
    }

    fn growth_opportunity_preference(dominant: DominantProfile) -> &'static str {
        match dominant {
            DominantProfile::D => "challenging projects and leadership roles",
            DominantProfile::I => "people skills and influence development",
            DominantProfile::S => "mastery and deep expertise",
            DominantProfile::C => "technical skills and professional certification",
        }
    }
}
