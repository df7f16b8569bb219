use super::element_data::ElementRecord;

/// Element defaults distributed with SDTrimSP 6.01.
pub(crate) static SDTRIMSP_ELEMENTS: &[ElementRecord] = &[
    ElementRecord::new("H", "hydrogen", "Wasserstoff", 1, 1, 1, 1.007825, 0.04231, 1.1, 5.0),
    ElementRecord::new("He", "helium", "Helium", 2, 1, 18, 4.002603, 0.01878, 0.0, 5.0),
    ElementRecord::new("Li", "lithium", "Lithium", 3, 2, 1, 6.941, 0.04633, 1.64, 25.0),
    ElementRecord::new("Be", "beryllium", "Beryllium", 4, 2, 2, 9.012182, 0.12347, 3.31, 15.0),
    ElementRecord::new("B", "boron", "Bor", 5, 2, 13, 10.811, 0.1309, 5.76, 25.0),
    ElementRecord::new("C", "carbon", "Kohlenstoff", 6, 2, 14, 12.011, 0.11331, 7.37, 25.0),
    ElementRecord::new("N", "nitrogen", "Stickstoff", 7, 2, 15, 14.00674, 0.03784, 4.9, 25.0),
    ElementRecord::new("O", "oxygen", "Sauerstoff", 8, 2, 16, 15.9994, 0.04291, 1.0, 5.0),
    ElementRecord::new("F", "fluorine", "Fluor", 9, 2, 17, 18.998403, 0.04796, 0.82, 25.0),
    ElementRecord::new("Ne", "neon", "Neon", 10, 2, 18, 20.1797, 0.03603, 0.0, 5.0),
    ElementRecord::new("Na", "sodium", "Natrium", 11, 3, 1, 22.989768, 0.02544, 1.11, 25.0),
    ElementRecord::new("Mg", "magnesium", "Magnesium", 12, 3, 2, 24.305, 0.04306, 1.51, 10.0),
    ElementRecord::new("Al", "aluminum", "Aluminium", 13, 3, 13, 26.981539, 0.06022, 3.42, 16.0),
    ElementRecord::new("Si", "silicon", "Silicium", 14, 3, 14, 28.08553, 0.04994, 4.72, 13.0),
    ElementRecord::new("P", "phosphoros", "Phosphor(weiss)", 15, 3, 15, 30.973761, 0.03544, 3.27, 25.0),
    ElementRecord::new("S", "sulfur", "Schwefel", 16, 3, 16, 32.066, 0.03888, 2.85, 25.0),
    ElementRecord::new("Cl", "chlorine", "Chlor", 17, 3, 17, 35.4527, 0.0256, 1.0, 25.0),
    ElementRecord::new("Ar", "argon", "Argon", 18, 3, 18, 39.948, 0.0208, 0.0, 5.0),
    ElementRecord::new("K", "potassium", "Kalium", 19, 4, 1, 39.0983, 0.01328, 0.93, 25.0),
    ElementRecord::new("Ca", "calcium", "Calcium", 20, 4, 2, 40.078, 0.02314, 2.39, 25.0),
    ElementRecord::new("Sc", "scandium", "Scandium", 21, 4, 3, 44.95591, 0.04004, 3.9, 25.0),
    ElementRecord::new("Ti", "titanium", "Titan", 22, 4, 4, 47.867, 0.05712, 4.84, 19.0),
    ElementRecord::new("V", "vanadium", "Vanadium", 23, 4, 5, 50.9415, 0.07223, 5.33, 26.0),
    ElementRecord::new("Cr", "chromium", "Chrom", 24, 4, 6, 51.9961, 0.08327, 5.22, 28.0),
    ElementRecord::new("Mn", "maganese", "Mangan", 25, 4, 7, 54.938049, 0.08155, 2.92, 25.0),
    ElementRecord::new("Fe", "iron", "Eisen", 26, 4, 8, 55.847, 0.08491, 4.28, 17.0),
    ElementRecord::new("Co", "cobalt", "Cobalt", 27, 4, 9, 58.9332, 0.09084, 4.39, 22.0),
    ElementRecord::new("Ni", "nickel", "Nickel", 28, 4, 10, 58.6934, 0.09134, 4.44, 23.0),
    ElementRecord::new("Cu", "copper", "Kupfer", 29, 4, 11, 63.546, 0.08486, 3.2, 19.0),
    ElementRecord::new("Zn", "zinc", "Zink", 30, 4, 12, 65.39, 0.06569, 1.35, 14.0),
    ElementRecord::new("Ga", "gallium", "Gallium", 31, 4, 13, 69.723, 0.05099, 2.8, 12.0),
    ElementRecord::new("Ge", "germanium", "Germanium", 32, 4, 14, 72.61, 0.04415, 3.85, 15.0),
    ElementRecord::new("As", "arsenic", "Arsen", 33, 4, 15, 74.9216, 0.04603, 3.12, 25.0),
    ElementRecord::new("Se", "selenium", "Selen", 34, 4, 16, 78.96, 0.03653, 2.2, 25.0),
    ElementRecord::new("Br", "bromine (liquid)", "Brom", 35, 4, 17, 79.904, 0.02353, 1.16, 25.0),
    ElementRecord::new("Kr", "krypton", "Krypton", 36, 4, 18, 83.8, 0.01734, 0.0, 5.0),
    ElementRecord::new("Rb", "rubidium", "Rubidium", 37, 5, 1, 85.4678, 0.01078, 0.85, 25.0),
    ElementRecord::new("Sr", "strontium", "Strontium", 38, 5, 2, 87.62, 0.01835, 1.7, 25.0),
    ElementRecord::new("Y", "yttrium", "Yttrium", 39, 5, 3, 88.90585, 0.03029, 4.4, 25.0),
    ElementRecord::new("Zr", "zirkonium", "Zirkonium", 40, 5, 4, 91.224, 0.04296, 6.3, 21.0),
    ElementRecord::new("Nb", "niobium", "Niob", 41, 5, 5, 92.90638, 0.05562, 7.47, 28.0),
    ElementRecord::new("Mo", "molybdenum", "Molybdaen", 42, 5, 6, 95.94, 0.06453, 6.81, 33.0),
    ElementRecord::new("Tc", "technetium", "Technetium", 43, 5, 7, 97.907215, 0.07073, 6.81, 25.0),
    ElementRecord::new("Ru", "ruthenium", "Ruthenium", 44, 5, 8, 101.07, 0.07966, 6.73, 25.0),
    ElementRecord::new("Rh", "rhodium", "Rhodium", 45, 5, 9, 102.9055, 0.07262, 5.72, 25.0),
    ElementRecord::new("Pd", "palladium", "Palladium", 46, 5, 10, 106.42, 0.06802, 3.91, 26.0),
    ElementRecord::new("Ag", "silver", "Silber", 47, 5, 11, 107.8682, 0.05862, 2.95, 23.0),
    ElementRecord::new("Cd", "cadmium", "Cadmium", 48, 5, 12, 112.411, 0.04634, 1.16, 19.0),
    ElementRecord::new("In", "indium", "Indium", 49, 5, 13, 114.818, 0.03834, 2.52, 15.0),
    ElementRecord::new("Sn", "tin", "Zinn", 50, 5, 14, 118.71, 0.03698, 3.15, 22.0),
    ElementRecord::new("Sb", "antimony", "Antimon", 51, 5, 15, 121.757, 0.03306, 2.74, 25.0),
    ElementRecord::new("Te", "tellurium", "Tellur", 52, 5, 16, 127.6, 0.0295, 2.04, 25.0),
    ElementRecord::new("I", "iodine", "Iod", 53, 5, 17, 126.90447, 0.02344, 1.11, 25.0),
    ElementRecord::new("Xe", "xenon", "Xenon", 54, 5, 18, 131.29, 0.01348, 0.0, 5.0),
    ElementRecord::new("Cs", "cesium", "Caesium", 55, 6, 1, 132.90544, 0.00851, 0.8, 15.0),
    ElementRecord::new("Ba", "barium", "Barium", 56, 6, 2, 137.327, 0.01587, 1.89, 25.0),
    ElementRecord::new("La", "lanthanum", "Lanthan", 57, 8, 3, 138.9055, 0.02671, 4.47, 25.0),
    ElementRecord::new("Ce", "cerium", "Cer", 58, 8, 4, 140.115, 0.02911, 4.39, 25.0),
    ElementRecord::new("Pr", "praseodymium", "Praseodym", 59, 8, 5, 140.90765, 0.02767, 3.7, 25.0),
    ElementRecord::new("Nd", "neodymium", "Neodym", 60, 8, 6, 144.24, 0.02924, 3.41, 25.0),
    ElementRecord::new("Pm", "promethium", "Promethium", 61, 8, 7, 145.9127, 0.0298, 3.19, 25.0),
    ElementRecord::new("Sm", "samarium", "Samarium", 62, 8, 8, 150.36, 0.03018, 2.14, 25.0),
    ElementRecord::new("Eu", "europium", "Europium", 63, 8, 9, 151.965, 0.02078, 1.83, 25.0),
    ElementRecord::new("Gd", "gadolinium", "Gadolinium", 64, 8, 10, 157.25, 0.03024, 4.14, 25.0),
    ElementRecord::new("Tb", "terbium", "Terbium", 65, 8, 11, 158.92534, 0.03127, 4.05, 25.0),
    ElementRecord::new("Dy", "dysprosium", "Dysprosium", 66, 8, 12, 162.5, 0.03172, 3.04, 25.0),
    ElementRecord::new("Ho", "holmium", "Holmium", 67, 8, 13, 164.93032, 0.03211, 3.14, 25.0),
    ElementRecord::new("Er", "erbium", "Erbium", 68, 8, 14, 167.26, 0.03264, 3.3, 25.0),
    ElementRecord::new("Tm", "thulium", "Thulium", 69, 8, 15, 168.93421, 0.03323, 2.42, 25.0),
    ElementRecord::new("Yb", "ytterbium", "Ytterbium", 70, 8, 16, 173.04, 0.02424, 1.58, 25.0),
    ElementRecord::new("Lu", "litetium", "Litetium", 71, 6, 3, 174.967, 0.03387, 4.43, 17.0),
    ElementRecord::new("Hf", "hafnium", "Hafnium", 72, 6, 4, 178.49, 0.04491, 6.41, 25.0),
    ElementRecord::new("Ta", "tantal", "Tantal", 73, 6, 5, 180.9479, 0.05543, 8.1, 32.0),
    ElementRecord::new("W", "tungsten", "Wolfram", 74, 6, 6, 183.84, 0.06306, 8.79, 38.0),
    ElementRecord::new("Re", "rhenium", "Rhenium", 75, 6, 7, 186.207, 0.06805, 8.01, 40.0),
    ElementRecord::new("Os", "osmium", "Osmium", 76, 6, 8, 190.23, 0.07151, 8.18, 25.0),
    ElementRecord::new("Ir", "iridium", "Iridium", 77, 6, 9, 192.217, 0.07096, 6.93, 25.0),
    ElementRecord::new("Pt", "platinum", "Platin", 78, 6, 10, 195.08, 0.06622, 5.85, 33.0),
    ElementRecord::new("Au", "gold", "Gold", 79, 6, 11, 196.96655, 0.05907, 3.79, 36.0),
    ElementRecord::new("Hg", "mercury", "Quecksilber", 80, 6, 12, 200.59, 0.04067, 0.67, 25.0),
    ElementRecord::new("Tl", "thallium", "Thallium", 81, 6, 13, 204.3833, 0.03492, 1.88, 25.0),
    ElementRecord::new("Pb", "lead", "Blei", 82, 6, 14, 207.2, 0.03299, 2.03, 11.0),
    ElementRecord::new("Bi", "bismuth", "Bismuth", 83, 6, 15, 208.98038, 0.02821, 2.17, 25.0),
    ElementRecord::new("Po", "polonium", "Polonium", 84, 6, 16, 209.9828, 0.02637, 1.51, 25.0),
    ElementRecord::new("At", "astatine", "Astatium", 85, 6, 17, 209.987126, 0.02509, 0.94, 25.0),
    ElementRecord::new("Rn", "radon", "Radon", 86, 6, 18, 222.01757, 0.01193, 0.0, 5.0),
    ElementRecord::new("Fr", "francium", "Francium", 87, 7, 1, 223.019731, 0.00675, 0.78, 52.0),
    ElementRecord::new("Ra", "radium", "Radium", 88, 7, 2, 226.025402, 0.01465, 1.65, 25.0),
    ElementRecord::new("Ac", "actinium", "Actinium", 89, 9, 3, 227.027747, 0.02669, 4.21, 25.0),
    ElementRecord::new("Th", "thorium", "Thorium", 90, 9, 4, 232.03805, 0.03042, 6.2, 35.0),
    ElementRecord::new("Pa", "protactinium", "Protactinium", 91, 9, 5, 231.035878, 0.04006, 6.29, 25.0),
    ElementRecord::new("U", "u238", "U238", 92, 9, 6, 238.0289, 0.04832, 5.55, 25.0),
    ElementRecord::new("Np", "neptunium", "Neptunium", 93, 9, 7, 237.048166, 0.05195, 4.82, 25.0),
    ElementRecord::new("Pu", "plutonium", "Plutonium", 94, 9, 8, 244.064197, 0.04895, 3.65, 25.0),
    ElementRecord::new("Am", "americum", "Americum", 95, 9, 9, 243.061372, 0.03387, 2.94, 25.0),
    ElementRecord::new("Cm", "curium", "Curium", 96, 9, 10, 247.0703, 0.03293, 3.96, 25.0),
    ElementRecord::new("Bk", "berkelium", "Berkelium", 97, 9, 11, 247.0703, 0.03605, 3.02, 25.0),
    ElementRecord::new("Cf", "californium", "Californium", 98, 9, 12, 251.079579, 0.0, 1.81, 25.0),
    ElementRecord::new("Es", "einsteinium", "Einsteinium", 99, 9, 13, 252.082944, 0.0, 1.55, 25.0),
    ElementRecord::new("Fm", "fermium", "Fermium", 100, 9, 14, 257.075099, 0.0, 1.46, 25.0),
    ElementRecord::new("Md", "mendelevium", "Mendelevium", 101, 9, 15, 258.098427, 0.0, 1.2, 25.0),
    ElementRecord::new("No", "nobelium", "Nobelium", 102, 9, 16, 259.100931, 0.0, 1.12, 25.0),
    ElementRecord::new("Lr", "lawrencium", "Lawrencium", 103, 7, 3, 262.11, 0.0, 3.19, 25.0),
];

/// Element defaults distributed with TRIDYN 2022.
pub(crate) static TRIDYN_ELEMENTS: &[ElementRecord] = &[
    ElementRecord::new("H", "hydrogen", "Wasserstoff", 1, 1, 1, 1.008, 0.04271, 0.0, 8.0),
    ElementRecord::new("He", "helium", "Helium", 2, 1, 18, 4.0026, 0.01894, 0.0, 8.0),
    ElementRecord::new("Li", "lithium", "Lithium", 3, 2, 1, 6.939, 0.04597, 1.67, 8.0),
    ElementRecord::new("Be", "beryllium", "Beryllium", 4, 2, 2, 9.0122, 0.12046, 3.38, 8.0),
    ElementRecord::new("B", "boron", "Bor", 5, 2, 13, 10.811, 0.13093, 5.73, 8.0),
    ElementRecord::new("C", "carbon", "Kohlenstoff", 6, 2, 14, 12.011, 0.11364, 7.41, 8.0),
    ElementRecord::new("N", "nitrogen", "Stickstoff", 7, 2, 15, 14.007, 0.03481, 0.0, 8.0),
    ElementRecord::new("O", "oxygen", "Sauerstoff", 8, 2, 16, 15.999, 0.04302, 0.0, 8.0),
    ElementRecord::new("F", "fluorine", "Fluor", 9, 2, 17, 18.998, 0.03522, 0.0, 8.0),
    ElementRecord::new("Ne", "neon", "Neon", 10, 2, 18, 20.183, 0.03585, 0.0, 8.0),
    ElementRecord::new("Na", "sodium", "Natrium", 11, 3, 1, 22.989, 0.02541, 1.12, 8.0),
    ElementRecord::new("Mg", "magnesium", "Magnesium", 12, 3, 2, 24.312, 0.04302, 1.54, 8.0),
    ElementRecord::new("Al", "aluminum", "Aluminium", 13, 3, 13, 26.981, 0.06023, 3.36, 8.0),
    ElementRecord::new("Si", "silicon", "Silicium", 14, 3, 14, 28.086, 0.04977, 4.7, 8.0),
    ElementRecord::new("P", "phosphoros", "Phosphor(weiss)", 15, 3, 15, 30.973, 0.03542, 3.27, 8.0),
    ElementRecord::new("S", "sulfur", "Schwefel", 16, 3, 16, 32.064, 0.03885, 2.88, 8.0),
    ElementRecord::new("Cl", "chlorine", "Chlor", 17, 3, 17, 35.453, 0.0322, 0.0, 8.0),
    ElementRecord::new("Ar", "argon", "Argon", 18, 3, 18, 39.948, 0.02488, 0.0, 8.0),
    ElementRecord::new("K", "potassium", "Kalium", 19, 4, 1, 39.102, 0.01329, 0.93, 8.0),
    ElementRecord::new("Ca", "calcium", "Calcium", 20, 4, 2, 40.08, 0.02014, 1.83, 8.0),
    ElementRecord::new("Sc", "scandium", "Scandium", 21, 4, 3, 44.956, 0.04015, 3.49, 8.0),
    ElementRecord::new("Ti", "titanium", "Titan", 22, 4, 4, 47.9, 0.05682, 4.89, 8.0),
    ElementRecord::new("V", "vanadium", "Vanadium", 23, 4, 5, 50.942, 0.07213, 5.33, 8.0),
    ElementRecord::new("Cr", "chromium", "Chrom", 24, 4, 6, 51.996, 0.0833, 4.12, 8.0),
    ElementRecord::new("Mn", "maganese", "Mangan", 25, 4, 7, 54.938, 0.0815, 2.98, 8.0),
    ElementRecord::new("Fe", "iron", "Eisen", 26, 4, 8, 55.847, 0.08483, 4.34, 8.0),
    ElementRecord::new("Co", "cobalt", "Cobalt", 27, 4, 9, 58.933, 0.09095, 4.43, 8.0),
    ElementRecord::new("Ni", "nickel", "Nickel", 28, 4, 10, 58.71, 0.09128, 4.46, 8.0),
    ElementRecord::new("Cu", "copper", "Kupfer", 29, 4, 11, 63.54, 0.08483, 3.52, 8.0),
    ElementRecord::new("Zn", "zinc", "Zink", 30, 4, 12, 65.37, 0.06546, 1.35, 8.0),
    ElementRecord::new("Ga", "gallium", "Gallium", 31, 4, 13, 69.72, 0.05104, 2.82, 8.0),
    ElementRecord::new("Ge", "germanium", "Germanium", 32, 4, 14, 72.59, 0.04428, 3.88, 8.0),
    ElementRecord::new("As", "arsenic", "Arsen", 33, 4, 15, 74.922, 0.04597, 1.26, 8.0),
    ElementRecord::new("Se", "selenium", "Selen", 34, 4, 16, 78.96, 0.0365, 2.14, 8.0),
    ElementRecord::new("Br", "bromine (liquid)", "Brom", 35, 4, 17, 79.909, 0.02562, 0.0, 8.0),
    ElementRecord::new("Kr", "krypton", "Krypton", 36, 4, 18, 83.8, 0.0187, 0.0, 8.0),
    ElementRecord::new("Rb", "rubidium", "Rubidium", 37, 5, 1, 85.47, 0.01077, 0.86, 8.0),
    ElementRecord::new("Sr", "strontium", "Strontium", 38, 5, 2, 87.62, 0.01787, 1.7, 8.0),
    ElementRecord::new("Y", "yttrium", "Yttrium", 39, 5, 3, 88.905, 0.03041, 4.24, 8.0),
    ElementRecord::new("Zr", "zirkonium", "Zirkonium", 40, 5, 4, 91.22, 0.04271, 6.33, 8.0),
    ElementRecord::new("Nb", "niobium", "Niob", 41, 5, 5, 92.906, 0.05576, 7.59, 8.0),
    ElementRecord::new("Mo", "molybdenum", "Molybdaen", 42, 5, 6, 95.94, 0.06407, 6.83, 8.0),
    ElementRecord::new("Tc", "technetium", "Technetium", 43, 5, 7, 99.0, 0.0714, 0.0, 8.0),
    ElementRecord::new("Ru", "ruthenium", "Ruthenium", 44, 5, 8, 101.07, 0.07256, 6.69, 8.0),
    ElementRecord::new("Rh", "rhodium", "Rhodium", 45, 5, 9, 102.91, 0.07256, 5.78, 8.0),
    ElementRecord::new("Pd", "palladium", "Palladium", 46, 5, 10, 106.4, 0.06767, 3.91, 8.0),
    ElementRecord::new("Ag", "silver", "Silber", 47, 5, 11, 107.87, 0.05847, 2.97, 8.0),
    ElementRecord::new("Cd", "cadmium", "Cadmium", 48, 5, 12, 112.4, 0.04597, 1.16, 8.0),
    ElementRecord::new("In", "indium", "Indium", 49, 5, 13, 114.82, 0.03836, 2.49, 8.0),
    ElementRecord::new("Sn", "tin", "Zinn", 50, 5, 14, 118.69, 0.03695, 3.12, 8.0),
    ElementRecord::new("Sb", "antimony", "Antimon", 51, 5, 15, 121.75, 0.03273, 2.72, 8.0),
    ElementRecord::new("Te", "tellurium", "Tellur", 52, 5, 16, 127.6, 0.02938, 2.02, 8.0),
    ElementRecord::new("I", "iodine", "Iod", 53, 5, 17, 126.9, 0.02343, 0.0, 8.0),
    ElementRecord::new("Xe", "xenon", "Xenon", 54, 5, 18, 131.3, 0.01403, 0.0, 8.0),
    ElementRecord::new("Cs", "cesium", "Caesium", 55, 6, 1, 132.91, 0.0086, 0.81, 8.0),
    ElementRecord::new("Ba", "barium", "Barium", 56, 6, 2, 137.34, 0.01544, 1.84, 8.0),
    ElementRecord::new("La", "lanthanum", "Lanthan", 57, 8, 3, 138.91, 0.02676, 4.42, 8.0),
    ElementRecord::new("Ce", "cerium", "Cer", 58, 8, 4, 140.12, 0.02868, 4.23, 8.0),
    ElementRecord::new("Pr", "praseodymium", "Praseodym", 59, 8, 5, 140.91, 0.02895, 3.71, 8.0),
    ElementRecord::new("Nd", "neodymium", "Neodym", 60, 8, 6, 144.24, 0.02923, 3.28, 8.0),
    ElementRecord::new("Pm", "promethium", "Promethium", 61, 8, 7, 147.0, 0.02635, 0.0, 8.0),
    ElementRecord::new("Sm", "samarium", "Samarium", 62, 8, 8, 150.35, 0.03026, 2.16, 8.0),
    ElementRecord::new("Eu", "europium", "Europium", 63, 8, 9, 151.96, 0.02084, 1.85, 8.0),
    ElementRecord::new("Gd", "gadolinium", "Gadolinium", 64, 8, 10, 157.25, 0.03026, 3.57, 8.0),
    ElementRecord::new("Tb", "terbium", "Terbium", 65, 8, 11, 158.92, 0.03136, 3.81, 8.0),
    ElementRecord::new("Dy", "dysprosium", "Dysprosium", 66, 8, 12, 162.5, 0.0317, 2.89, 8.0),
    ElementRecord::new("Ho", "holmium", "Holmium", 67, 8, 13, 164.93, 0.0322, 3.05, 8.0),
    ElementRecord::new("Er", "erbium", "Erbium", 68, 8, 14, 167.26, 0.03273, 3.05, 8.0),
    ElementRecord::new("Tm", "thulium", "Thulium", 69, 8, 15, 168.93, 0.03327, 2.52, 8.0),
    ElementRecord::new("Yb", "ytterbium", "Ytterbium", 70, 8, 16, 173.04, 0.02428, 1.74, 8.0),
    ElementRecord::new("Lu", "litetium", "Litetium", 71, 6, 3, 174.97, 0.03383, 4.29, 8.0),
    ElementRecord::new("Hf", "hafnium", "Hafnium", 72, 6, 4, 178.49, 0.04428, 6.31, 8.0),
    ElementRecord::new("Ta", "tantal", "Tantal", 73, 6, 5, 180.95, 0.05525, 8.1, 8.0),
    ElementRecord::new("W", "tungsten", "Wolfram", 74, 6, 6, 183.85, 0.0632, 8.68, 8.0),
    ElementRecord::new("Re", "rhenium", "Rhenium", 75, 6, 7, 186.2, 0.06805, 8.09, 8.0),
    ElementRecord::new("Os", "osmium", "Osmium", 76, 6, 8, 190.2, 0.07144, 8.13, 8.0),
    ElementRecord::new("Ir", "iridium", "Iridium", 77, 6, 9, 192.2, 0.07052, 6.9, 8.0),
    ElementRecord::new("Pt", "platinum", "Platin", 78, 6, 10, 195.09, 0.06618, 5.86, 8.0),
    ElementRecord::new("Au", "gold", "Gold", 79, 6, 11, 196.97, 0.05904, 3.8, 8.0),
    ElementRecord::new("Hg", "mercury", "Quecksilber", 80, 6, 12, 200.59, 0.04069, 0.64, 8.0),
    ElementRecord::new("Tl", "thallium", "Thallium", 81, 6, 13, 204.37, 0.03501, 1.88, 8.0),
    ElementRecord::new("Pb", "lead", "Blei", 82, 6, 14, 207.19, 0.03291, 2.03, 8.0),
    ElementRecord::new("Bi", "bismuth", "Bismuth", 83, 6, 15, 208.98, 0.02827, 2.17, 8.0),
    ElementRecord::new("Po", "polonium", "Polonium", 84, 6, 16, 210.0, 0.02653, 1.5, 8.0),
    ElementRecord::new("At", "astatine", "Astatium", 85, 6, 17, 210.0, 0.02868, 0.0, 8.0),
    ElementRecord::new("Rn", "radon", "Radon", 86, 6, 18, 222.0, 0.02688, 0.0, 8.0),
    ElementRecord::new("Fr", "francium", "Francium", 87, 7, 1, 223.0, 0.027, 0.0, 8.0),
    ElementRecord::new("Ra", "radium", "Radium", 88, 7, 2, 226.0, 0.01338, 0.0, 8.0),
    ElementRecord::new("Ac", "actinium", "Actinium", 89, 9, 3, 227.0, 0.02653, 0.0, 8.0),
    ElementRecord::new("Th", "thorium", "Thorium", 90, 9, 4, 232.0, 0.03026, 5.93, 8.0),
    ElementRecord::new("Pa", "protactinium", "Protactinium", 91, 9, 5, 231.0, 0.04015, 0.0, 8.0),
    ElementRecord::new("U", "u238", "U238", 92, 9, 6, 238.04, 0.04818, 5.42, 8.0),
];
