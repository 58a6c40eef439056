//! 15-Step Narrative Assembler.
//!
//! Produces the four fixed phases of a devolutiva session:
//! rapport (1-4), indices (5-8), identity (9-12), transformation (13-15).
//! Step titles, descriptions, and visualization hints are fixed per step;
//! content is pure string templating over the analysis data, so step count
//! and order never vary.

use crate::domain::foundation::{DevolutivaPhase, DomainError, Visualization};
use crate::domain::profile::{DominantProfile, SkillKind};

use super::{DevolutivaData, DevolutivaSession, DevolutivaStep};

/// Assembler for the fixed 15-step narrative.
///
/// Stateless: every operation is a pure function of its inputs.
pub struct NarrativeAssembler;

impl NarrativeAssembler {
    /// Generates the complete session: all four phases appended in order,
    /// then marked complete.
    pub fn generate_complete(data: &DevolutivaData) -> Result<DevolutivaSession, DomainError> {
        let mut session = DevolutivaSession::new(data.id, data.subject_name.clone());

        session.append_steps(Self::rapport_phase(data))?;
        session.append_steps(Self::indices_phase(data))?;
        session.append_steps(Self::identity_phase(data))?;
        session.append_steps(Self::transformation_phase(data))?;

        session.complete()?;
        Ok(session)
    }

    /// Phase 1: Rapport & Initial Understanding (steps 1-4).
    pub fn rapport_phase(data: &DevolutivaData) -> Vec<DevolutivaStep> {
        vec![
            DevolutivaStep::new(
                DevolutivaPhase::Rapport,
                1,
                "Welcome & Journey Overview",
                "Establish psychological safety and explain the 15-step devolutiva journey",
                Self::welcome_content(data),
                Some(Visualization::Narrative),
            ),
            DevolutivaStep::new(
                DevolutivaPhase::Rapport,
                2,
                "Your DISC Behavioral Profile",
                "Present DISC profile in accessible, empowering language",
                Self::disc_overview_content(data),
                Some(Visualization::Chart),
            ),
            DevolutivaStep::new(
                DevolutivaPhase::Rapport,
                3,
                "Self-Perception vs. Environmental Demand",
                "Explain the tower model and gaps between autopercepção and environment",
                Self::tower_analysis_content(data),
                Some(Visualization::Chart),
            ),
            DevolutivaStep::new(
                DevolutivaPhase::Rapport,
                4,
                "Initial Insights & Key Discoveries",
                "Synthesize phase 1 learnings and prepare for deeper analysis",
                Self::initial_insights_content(),
                Some(Visualization::Narrative),
            ),
        ]
    }

    /// Phase 2: Behavioral Indices & Health Analysis (steps 5-8).
    pub fn indices_phase(data: &DevolutivaData) -> Vec<DevolutivaStep> {
        vec![
            DevolutivaStep::new(
                DevolutivaPhase::Indices,
                5,
                "Behavioral Health Indices Analysis",
                "Deep dive into 9 health indices with interpretations",
                Self::health_indices_content(data),
                Some(Visualization::Chart),
            ),
            DevolutivaStep::new(
                DevolutivaPhase::Indices,
                6,
                "Burnout Risk & Stress Patterns",
                "Assess burnout risk based on indices and identify stress patterns",
                Self::burnout_assessment_content(data),
                Some(Visualization::Chart),
            ),
            DevolutivaStep::new(
                DevolutivaPhase::Indices,
                7,
                "Your Key Strengths & Competencies",
                "Identify and celebrate core competencies and strengths",
                Self::strengths_content(data),
                Some(Visualization::Table),
            ),
            DevolutivaStep::new(
                DevolutivaPhase::Indices,
                8,
                "Career Anchors & Professional Alignment",
                "Connect DISC profile to career anchor alignment",
                Self::anchors_content(data),
                Some(Visualization::Narrative),
            ),
        ]
    }

    /// Phase 3: Identity & Values Discovery (steps 9-12).
    pub fn identity_phase(data: &DevolutivaData) -> Vec<DevolutivaStep> {
        vec![
            DevolutivaStep::new(
                DevolutivaPhase::Identity,
                9,
                "Your Values Pyramid",
                "Build and explore your personal values hierarchy",
                Self::pyramid_content(data),
                Some(Visualization::Chart),
            ),
            DevolutivaStep::new(
                DevolutivaPhase::Identity,
                10,
                "Internal War: Conflicting Forces",
                "Identify and resolve internal conflicts and contradictions",
                Self::internal_war_content(data),
                Some(Visualization::Narrative),
            ),
            DevolutivaStep::new(
                DevolutivaPhase::Identity,
                11,
                "Your Appreciation Languages",
                "Understand how you like to be recognized and appreciated",
                Self::languages_content(),
                Some(Visualization::Narrative),
            ),
            DevolutivaStep::new(
                DevolutivaPhase::Identity,
                12,
                "Identity Summary & Integrated Self",
                "Synthesize all identity insights into integrated self-understanding",
                Self::identity_summary_content(data),
                Some(Visualization::Narrative),
            ),
        ]
    }

    /// Phase 4: Transformation & Action Planning (steps 13-15).
    pub fn transformation_phase(data: &DevolutivaData) -> Vec<DevolutivaStep> {
        vec![
            DevolutivaStep::new(
                DevolutivaPhase::Transformation,
                13,
                "Development Recommendations",
                "Personalized recommendations for growth and development",
                Self::recommendations_content(data),
                Some(Visualization::Narrative),
            ),
            DevolutivaStep::new(
                DevolutivaPhase::Transformation,
                14,
                "Your SMART Task & First Action",
                "Define specific, measurable, achievable, relevant, time-bound next step",
                Self::smart_task_content(),
                Some(Visualization::Narrative),
            ),
            DevolutivaStep::new(
                DevolutivaPhase::Transformation,
                15,
                "Action Plan & 90-Day Roadmap",
                "Create comprehensive 90-day action plan for sustainable change",
                Self::action_plan_content(),
                Some(Visualization::Table),
            ),
        ]
    }

    // ─────────────────────────────────────────────────────────────────────
    // Content templates
    // ─────────────────────────────────────────────────────────────────────

    fn welcome_content(data: &DevolutivaData) -> String {
        format!(
            "# Welcome to Your Devolutiva Journey, {}!\n\n\
             This 15-step journey is designed to help you understand yourself more deeply \
             and create meaningful change.\n\n\
             ## What to Expect\n\
             - **Understanding**: Deep insights into your behavioral patterns and values\n\
             - **Clarity**: Clear picture of where you are and where you want to go\n\
             - **Action**: Concrete, personalized recommendations for growth\n\n\
             ## The 4 Phases\n\
             1. **Rapport** (Steps 1-4): Build foundation and introduce key concepts\n\
             2. **Indices** (Steps 5-8): Deep analysis of behavioral health and strengths\n\
             3. **Identity** (Steps 9-12): Explore your values, identity, and appreciation languages\n\
             4. **Transformation** (Steps 13-15): Create actionable development plan\n\n\
             Let's begin this transformative journey together.\n",
            data.subject_name
        )
    }

    fn disc_overview_content(data: &DevolutivaData) -> String {
        let profile = &data.disc_profile;
        format!(
            "# Your DISC Behavioral Profile\n\n\
             ## Profile Scores\n\
             - **Dominância (D)**: {}% - Drive, assertiveness, results-orientation\n\
             - **Influência (I)**: {}% - Sociability, optimism, persuasion\n\
             - **Estabilidade (S)**: {}% - Patience, stability, loyalty\n\
             - **Conformidade (C)**: {}% - Accuracy, rules, quality\n\n\
             ## Your Dominant Profile: {}\n\n\
             Your primary behavioral style emphasizes:\n{}\n\n\
             ## What This Means\n\
             Your DISC profile is your natural behavioral lens - how you typically approach \
             situations, make decisions, and interact with others. It's not about limitations, \
             but about understanding your defaults so you can adapt when needed.\n",
            profile.d(),
            profile.i(),
            profile.s(),
            profile.c(),
            data.dominant_profile,
            Self::profile_interpretation(data),
        )
    }

    fn profile_interpretation(data: &DevolutivaData) -> String {
        let profile = &data.disc_profile;
        match data.dominant_profile {
            DominantProfile::D => format!(
                "**Dominância** ({}%): You are driven, decisive, and results-oriented. You \
                 lead, challenge the status quo, and push toward goals. Others see you as \
                 confident and ambitious. Key challenge: Remember that not everything is a \
                 battle or race.",
                profile.d()
            ),
            DominantProfile::I => format!(
                "**Influência** ({}%): You are sociable, enthusiastic, and persuasive. You \
                 inspire others and create connections. People enjoy your optimism and energy. \
                 Key challenge: Ensure follow-through matches your enthusiasm.",
                profile.i()
            ),
            DominantProfile::S => format!(
                "**Estabilidade** ({}%): You are patient, reliable, and supportive. You create \
                 stability and are someone others can count on. You're a good listener and team \
                 player. Key challenge: Stand up for your own needs, not just others'.",
                profile.s()
            ),
            DominantProfile::C => format!(
                "**Conformidade** ({}%): You are accurate, thoughtful, and quality-focused. You \
                 follow guidelines carefully and ensure work meets high standards. Others trust \
                 your judgment. Key challenge: Don't let perfectionism paralyze progress.",
                profile.c()
            ),
        }
    }

    fn tower_analysis_content(data: &DevolutivaData) -> String {
        let mut towers = String::new();
        for tower in &data.tower_data {
            towers.push_str(&format!(
                "\n### {} Profile\n\
                 - Self-Perception: {}%\n\
                 - Environmental Demand: {}%\n\
                 - Gap: {}%\n\
                 - Direction: {}\n",
                tower.profile,
                tower.self_perception,
                tower.environment_demand,
                tower.gap(),
                tower.direction(),
            ));
        }

        format!(
            "# Tower Analysis: Self-Perception vs. Environmental Demand\n\n\
             ## The Tower Model\n\
             The tower shows the gap between:\n\
             - **Autopercepção (Self)**: How you see yourself\n\
             - **Demanda do Ambiente (Environment)**: What the environment demands\n\n\
             ## Your Towers\n{}\n\
             ## Implications\n\
             A large gap suggests stress points where you're either suppressing your natural \
             style or over-expressing it.\n",
            towers
        )
    }

    fn initial_insights_content() -> String {
        String::from(
            "# Initial Insights from Phase 1\n\n\
             ## Key Discoveries\n\
             1. Your dominant DISC profile provides your primary behavioral lens\n\
             2. The gaps between self-perception and environment reveal adaptation stress points\n\
             3. These insights form the foundation for deeper analysis\n\n\
             ## What's Next\n\
             In the next phase, we'll dive deep into 9 behavioral health indices to understand \
             your overall wellbeing and stress patterns.\n\n\
             ## Reflection Questions\n\
             - What surprised you about your DISC profile?\n\
             - Do the gaps resonate with your experience?\n\
             - What would change if you more fully expressed your natural style?\n",
        )
    }

    fn health_indices_content(data: &DevolutivaData) -> String {
        let mut overview = String::new();
        for index in &data.health_indexes {
            overview.push_str(&format!(
                "\n### {}\n\
                 - **Value**: {}\n\
                 - **Diagnosis**: {}\n\
                 - **Impact**: {}\n\
                 - **Alert**: {}\n",
                index.name(),
                index.percentage(),
                index.diagnosis,
                index.impact,
                if index.is_alert {
                    "🚨 Requires attention"
                } else {
                    "✅ Healthy"
                },
            ));
        }

        format!(
            "# Your 9 Behavioral Health Indices\n\n\
             ## Index Overview\n{}\n\
             ## Overall Assessment\n\
             These nine indices provide a comprehensive view of your behavioral health across \
             different dimensions.\n",
            overview
        )
    }

    fn burnout_assessment_content(data: &DevolutivaData) -> String {
        let level = if data.burnout_risk {
            "🚨 **HIGH RISK** - Immediate attention recommended"
        } else {
            "✅ **LOW RISK** - Healthy patterns detected"
        };

        format!(
            "# Burnout Risk Assessment\n\n\
             ## Your Burnout Risk Level\n{}\n\n\
             ## Key Factors\n\
             Based on your health indices, burnout risk is driven by:\n\
             - Stress level (Estabilidade index)\n\
             - Recovery capacity (Paciência index)\n\
             - Work-life balance indicators\n\
             - Support system strength\n\n\
             ## Recommendations\n{}\n",
            level,
            Self::burnout_recommendations(data),
        )
    }

    fn burnout_recommendations(data: &DevolutivaData) -> &'static str {
        if data.burnout_risk {
            "1. **Immediate**: Schedule time off or reduce intensity\n\
             2. **Short-term**: Identify one stressor to eliminate this month\n\
             3. **Medium-term**: Build recovery practices into your weekly routine\n\
             4. **Long-term**: Realign work with values and boundaries"
        } else {
            "1. **Maintain**: Keep current practices that support wellbeing\n\
             2. **Strengthen**: Deepen your recovery and support systems\n\
             3. **Expand**: Share your practices with others facing similar challenges"
        }
    }

    fn strengths_content(data: &DevolutivaData) -> String {
        let list = |kind: SkillKind, note: &str| {
            data.skills
                .iter()
                .filter(|skill| skill.kind == kind)
                .map(|skill| format!("- **{}**: {}", skill.name, note))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let core = data
            .skills
            .iter()
            .filter(|skill| skill.kind == SkillKind::Core)
            .map(|skill| match skill.proficiency {
                Some(p) => format!("- **{}**: {}", skill.name, p),
                None => format!("- **{}**: Strong competency", skill.name),
            })
            .collect::<Vec<_>>()
            .join("\n");
        let expansion = list(SkillKind::Expansion, "Growth opportunity");
        let retraction = list(SkillKind::Retraction, "Opportunity to moderate");

        format!(
            "# Your Key Strengths & Competencies\n\n\
             ## Core Strengths\n{}\n\n\
             ## Expandable Skills\n{}\n\n\
             ## Development Considerations\n{}\n\n\
             ## Leveraging Your Strengths\n\
             The most successful people don't try to fix all weaknesses - they double down on \
             strengths while managing blind spots.\n",
            core, expansion, retraction
        )
    }

    fn anchors_content(data: &DevolutivaData) -> String {
        let base = Self::bullet_list(&data.pyramid.base);
        let middle = Self::bullet_list(&data.pyramid.middle);

        format!(
            "# Career Anchors & Professional Alignment\n\n\
             Your career anchors reveal what truly matters to you professionally.\n\n\
             ## How Your DISC Aligns with Career Anchors\n\
             - Your {} profile naturally aligns with certain anchor types\n\
             - Understanding this alignment helps you make career decisions that feel authentic\n\n\
             ## Your Skill Pyramid\n\
             ### Foundation (Must-Haves)\n{}\n\n\
             ### Development (Growing Edge)\n{}\n\n\
             ### Apex (Unique Contribution)\n- {}\n\n\
             ## Career Alignment Insight\n\
             When your work aligns with your anchors, engagement and satisfaction naturally \
             increase.\n",
            data.dominant_profile, base, middle, data.pyramid.top
        )
    }

    fn pyramid_content(data: &DevolutivaData) -> String {
        let base = Self::bullet_list(&data.pyramid.base);
        let middle = Self::bullet_list(&data.pyramid.middle);

        format!(
            "# Your Values Pyramid\n\n\
             ## Foundation (Core Values)\n{}\n\n\
             These are non-negotiable core values that define who you are.\n\n\
             ## Middle Tier (Important Values)\n{}\n\n\
             These values are important and guide your decisions.\n\n\
             ## Apex (Ultimate Value / Purpose)\n- **{}**\n\n\
             This is your overarching purpose - the one thing that ties everything together.\n\n\
             ## Living Your Pyramid\n\
             Alignment occurs when your daily life reflects your pyramid structure.\n",
            base, middle, data.pyramid.top
        )
    }

    fn internal_war_content(data: &DevolutivaData) -> String {
        format!(
            "# Internal War: Conflicting Forces\n\n\
             ## Understanding Internal Conflicts\n\
             Internal war occurs when different parts of your personality have contradictory \
             needs or values.\n\n\
             ## Your Profile's Internal Tensions\n\
             Based on your {} profile:\n{}\n\n\
             ## Integration Strategy\n\
             Rather than eliminating conflicts, the goal is integration - honoring all parts \
             of yourself.\n\n\
             ## Reflection\n\
             - What competing values create tension in your life?\n\
             - How can you honor both instead of choosing one?\n",
            data.dominant_profile,
            Self::internal_conflicts(data.dominant_profile),
        )
    }

    fn internal_conflicts(dominant: DominantProfile) -> &'static str {
        match dominant {
            DominantProfile::D => {
                "- **Speed vs. Quality**: Your drive for results can conflict with taking time \
                 for quality\n\
                 - **Independence vs. Collaboration**: You lead, but sometimes resist input from \
                 others\n\
                 - **Change vs. Stability**: You push forward, but may destabilize teams needing \
                 predictability"
            }
            DominantProfile::I => {
                "- **Enthusiasm vs. Depth**: Your enthusiasm can outpace your ability to follow \
                 through\n\
                 - **Optimism vs. Realism**: Your positive outlook may minimize real challenges\n\
                 - **Connection vs. Focus**: Your sociability can distract from deep work"
            }
            DominantProfile::S => {
                "- **Support vs. Self-advocacy**: You support others well, but may neglect your \
                 own needs\n\
                 - **Loyalty vs. Growth**: Your loyalty to relationships can limit growth \
                 opportunities\n\
                 - **Stability vs. Innovation**: Your preference for stability can resist \
                 necessary change"
            }
            DominantProfile::C => {
                "- **Quality vs. Perfectionism**: Your quality focus can become perfectionism \
                 that blocks progress\n\
                 - **Accuracy vs. Decisiveness**: Your need for complete information can slow \
                 decisions\n\
                 - **Standards vs. Acceptance**: Your high standards can create judgment of self \
                 and others"
            }
        }
    }

    fn languages_content() -> String {
        String::from(
            "# Your Appreciation Languages\n\n\
             Everyone has different ways they like to be recognized and appreciated.\n\n\
             ## The Five Languages\n\
             1. **Recognition** - Public acknowledgment of contributions\n\
             2. **Quality Time** - Undivided attention and presence\n\
             3. **Tangible Rewards** - Concrete benefits and compensation\n\
             4. **Emotional Support** - Empathy and understanding\n\
             5. **Growth Opportunities** - Learning and development\n\n\
             ## Your Dominant Languages\n\
             These are how you most feel valued and appreciated in work and relationships.\n\n\
             ## Application\n\
             Understanding your appreciation languages helps you:\n\
             - Communicate what you need\n\
             - Design work environments that engage you\n\
             - Build deeper relationships\n",
        )
    }

    fn identity_summary_content(data: &DevolutivaData) -> String {
        let top_skills = data
            .skills
            .iter()
            .filter(|skill| skill.kind == SkillKind::Core)
            .take(3)
            .map(|skill| skill.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "# Identity Summary: Your Integrated Self\n\n\
             ## Integration Across Phases\n\
             Through phases 1-3, you've explored:\n\
             - Your behavioral patterns (DISC)\n\
             - Your health and wellbeing (Indices)\n\
             - Your values and identity (Pyramid, Languages, Anchors)\n\n\
             ## Your Unique Identity\n\
             {}, your integrated self is characterized by:\n\
             - **Behavioral Style**: {} profile\n\
             - **Core Values**: {}\n\
             - **Ultimate Purpose**: {}\n\
             - **Key Strengths**: {}\n\n\
             ## Ready for Transformation\n\
             With clear self-understanding, you're now ready to create intentional change \
             aligned with your authentic self.\n",
            data.subject_name,
            data.dominant_profile,
            data.pyramid.base.join(", "),
            data.pyramid.top,
            top_skills,
        )
    }

    fn recommendations_content(data: &DevolutivaData) -> String {
        let gaps = data
            .health_indexes
            .iter()
            .filter(|index| index.is_alert)
            .map(|index| format!("- {}: {}", index.name(), index.diagnosis))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "# Development Recommendations\n\n\
             ## Personalized Growth Areas\n\
             Based on your complete assessment, here are priority development areas:\n\n\
             ### 1. Leverage Your Natural Strengths\n\
             Focus on expanding what you do best. Success begets confidence.\n\n\
             ### 2. Address Critical Gaps\n\
             These are the weak points that limit your effectiveness:\n{}\n\n\
             ### 3. Develop Adaptability\n\
             Your ability to adapt your {} style when needed is a superpower.\n\n\
             ## 90-Day Focus Areas\n\
             1. **Month 1**: Foundation - Understand and accept current state\n\
             2. **Month 2**: Build - Develop new habits and practices\n\
             3. **Month 3**: Integrate - Make changes sustainable and automatic\n\n\
             ## Success Indicators\n\
             - Increased self-awareness\n\
             - Reduced internal conflict\n\
             - Greater alignment between values and actions\n\
             - Improved wellbeing scores\n",
            gaps, data.dominant_profile,
        )
    }

    fn smart_task_content() -> String {
        String::from(
            "# Your SMART Task: First Concrete Action\n\n\
             ## The SMART Framework\n\
             - **S**pecific: Clear and well-defined\n\
             - **M**easurable: You can track progress\n\
             - **A**chievable: Realistic and possible\n\
             - **R**elevant: Aligned with your values and goals\n\
             - **T**ime-bound: Has a clear deadline\n\n\
             ## Your First SMART Task\n\
             Based on your assessment, here's your recommended first action:\n\n\
             **[Generated based on profile and identified priorities]**\n\n\
             ## Implementation Steps\n\
             1. Write it down and make it visible\n\
             2. Identify one person to share it with for accountability\n\
             3. Schedule your first step\n\
             4. Set a weekly review cadence\n\n\
             ## The Power of One Task\n\
             Transformation often starts with one small, right action. This task is designed \
             to be achievable while moving you toward your goals.\n",
        )
    }

    fn action_plan_content() -> String {
        String::from(
            "# Your 90-Day Action Plan\n\n\
             ## Phase Overview\n\
             ### Month 1: Foundation (Week 1-4)\n\
             - Weeks 1-2: Build awareness and acceptance\n\
             - Weeks 3-4: Identify triggers and patterns\n\n\
             ### Month 2: Building (Week 5-8)\n\
             - Weeks 5-6: Develop new practices\n\
             - Weeks 7-8: Increase consistency\n\n\
             ### Month 3: Integration (Week 9-12)\n\
             - Weeks 9-10: Deepen new habits\n\
             - Weeks 11-12: Prepare for sustained change\n\n\
             ## Weekly Cadence\n\
             - **Weekly Review** (15 min): Reflect on progress and adjustments\n\
             - **Monthly Deep Dive** (1 hour): Assess and realign\n\
             - **Quarterly Evolution** (2 hours): Plan next quarter\n\n\
             ## Success Metrics\n\
             - Increased self-awareness score\n\
             - Improved health index scores\n\
             - Greater alignment with values\n\
             - Positive feedback from others\n\n\
             ## Moving Forward\n\
             This 15-step journey completes, but your development continues. Use these insights \
             to make choices aligned with your authentic self.\n\n\
             **Next Steps:**\n\
             1. Schedule your first weekly review\n\
             2. Share your insights with trusted friend or mentor\n\
             3. Post your SMART task somewhere visible\n\
             4. Begin this week\n\n\
             ---\n\n\
             *Your devolutiva is complete. Your transformation begins now.*\n",
        )
    }

    fn bullet_list(items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
