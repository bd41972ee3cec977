use std::fmt;

use clap::ValueEnum;

/// How hard the ray marcher works per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderQuality {
    Low,
    #[default]
    Medium,
    High,
}

impl RenderQuality {
    /// Length of a single ray-march step, in units of the central mass radius.
    pub fn step_size(self) -> f32 {
        match self {
            RenderQuality::Low => 0.1,
            RenderQuality::Medium => 0.05,
            RenderQuality::High => 0.02,
        }
    }

    /// Number of ray-march steps before a ray is given up on.
    pub fn num_steps(self) -> u32 {
        match self {
            RenderQuality::Low => 300,
            RenderQuality::Medium => 600,
            RenderQuality::High => 1000,
        }
    }

    /// Preprocessor prelude to prepend to the fragment shader source.
    pub fn shader_defines(self) -> String {
        format!(
            "#define STEP {}\n#define NSTEPS {}\n",
            self.step_size(),
            self.num_steps()
        )
    }

    /// Total distance a ray can travel before it's dropped.
    pub fn ray_reach(self) -> f32 {
        self.step_size() * self.num_steps() as f32
    }
}

impl fmt::Display for RenderQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderQuality::Low => "low",
            RenderQuality::Medium => "medium",
            RenderQuality::High => "high",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        assert_eq!(RenderQuality::default(), RenderQuality::Medium);

        assert_eq!(RenderQuality::Low.num_steps(), 300);
        assert_eq!(RenderQuality::Medium.num_steps(), 600);
        assert_eq!(RenderQuality::High.num_steps(), 1000);

        // Finer steps never reach less far
        assert!(RenderQuality::High.step_size() < RenderQuality::Medium.step_size());
        assert!(RenderQuality::Medium.step_size() < RenderQuality::Low.step_size());
        approx::assert_relative_eq!(RenderQuality::Medium.ray_reach(), 30.0, max_relative = 1e-6);
        approx::assert_relative_eq!(RenderQuality::High.ray_reach(), 20.0, max_relative = 1e-6);
    }

    #[test]
    fn test_shader_defines() {
        assert_eq!(
            RenderQuality::Low.shader_defines(),
            "#define STEP 0.1\n#define NSTEPS 300\n"
        );
        assert_eq!(
            RenderQuality::Medium.shader_defines(),
            "#define STEP 0.05\n#define NSTEPS 600\n"
        );
        assert_eq!(
            RenderQuality::High.shader_defines(),
            "#define STEP 0.02\n#define NSTEPS 1000\n"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            RenderQuality::from_str("high", true),
            Ok(RenderQuality::High)
        );
        assert!(RenderQuality::from_str("ultra", true).is_err());
        assert_eq!(RenderQuality::Low.to_string(), "low");
    }
}
