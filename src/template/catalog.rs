//! Gesture catalog.
//!
//! Raw defining points for the thirty-seven stock classes, as captured:
//! screen coordinates with 1-based stroke ids. Normalization happens when
//! the store loads them, so the table stays plain data. The first
//! [`BUILTIN_LEN`] classes form the permanent built-in prefix; the rest load
//! like user templates and go away when the store clears them.

/// Length of the built-in prefix within [`GESTURES`].
pub(crate) const BUILTIN_LEN: usize = 16;

pub(crate) struct CatalogGesture {
    pub(crate) name: &'static str,
    pub(crate) points: &'static [(f64, f64, u32)],
}

pub(crate) const GESTURES: &[CatalogGesture] = &[
    CatalogGesture {
        name: "Bo",
        points: &[
            (209.0, 76.0, 1),
            (160.0, 139.0, 1),
            (160.0, 135.0, 1),
            (172.0, 133.0, 1),
            (274.0, 137.0, 1),
            (275.0, 139.0, 1),
            (230.0, 232.0, 1),
            (228.0, 232.0, 1),
            (202.0, 207.0, 1),
        ],
    },
    CatalogGesture {
        name: "Po",
        points: &[
            (188.0, 65.0, 1),
            (130.0, 115.0, 1),
            (132.0, 116.0, 1),
            (257.0, 111.0, 1),
            (258.0, 111.0, 1),
            (143.0, 208.0, 1),
            (155.0, 152.0, 2),
            (245.0, 221.0, 2),
        ],
    },
    CatalogGesture {
        name: "Mo",
        points: &[
            (115.0, 120.0, 1),
            (115.0, 187.0, 1),
            (117.0, 117.0, 2),
            (220.0, 117.0, 2),
            (218.0, 123.0, 2),
            (215.0, 187.0, 2),
        ],
    },
    CatalogGesture {
        name: "Fo",
        points: &[
            (130.0, 85.0, 1),
            (221.0, 90.0, 1),
            (130.0, 88.0, 2),
            (124.0, 165.0, 2),
            (124.0, 161.0, 2),
            (231.0, 159.0, 2),
        ],
    },
    CatalogGesture {
        name: "Der",
        points: &[
            (183.0, 80.0, 1),
            (150.0, 111.0, 1),
            (146.0, 115.0, 1),
            (238.0, 118.0, 1),
            (238.0, 115.0, 1),
            (229.0, 205.0, 1),
            (227.0, 207.0, 1),
            (208.0, 175.0, 1),
            (193.0, 119.0, 2),
            (145.0, 189.0, 2),
        ],
    },
    CatalogGesture {
        name: "Ter",
        points: &[
            (116.0, 119.0, 1),
            (254.0, 113.0, 1),
            (195.0, 77.0, 2),
            (147.0, 197.0, 2),
            (144.0, 195.0, 2),
            (222.0, 192.0, 2),
            (218.0, 170.0, 3),
            (227.0, 227.0, 3),
        ],
    },
    CatalogGesture {
        name: "Ner",
        points: &[
            (158.0, 71.0, 1),
            (257.0, 75.0, 1),
            (254.0, 77.0, 1),
            (191.0, 126.0, 1),
            (186.0, 125.0, 1),
            (266.0, 125.0, 1),
            (266.0, 125.0, 1),
            (248.0, 232.0, 1),
            (249.0, 233.0, 1),
            (198.0, 211.0, 1),
        ],
    },
    CatalogGesture {
        name: "Ler",
        points: &[
            (156.0, 69.0, 1),
            (122.0, 131.0, 1),
            (120.0, 128.0, 1),
            (269.0, 127.0, 1),
            (268.0, 128.0, 1),
            (248.0, 246.0, 1),
            (246.0, 246.0, 1),
            (211.0, 217.0, 1),
            (213.0, 72.0, 2),
            (122.0, 240.0, 2),
        ],
    },
    CatalogGesture {
        name: "Ger",
        points: &[
            (172.0, 91.0, 1),
            (120.0, 171.0, 1),
            (118.0, 169.0, 1),
            (157.0, 220.0, 1),
            (223.0, 107.0, 1),
            (186.0, 162.0, 1),
            (185.0, 162.0, 1),
            (185.0, 163.0, 2),
            (220.0, 229.0, 2),
        ],
    },
    CatalogGesture {
        name: "Ker",
        points: &[
            (139.0, 95.0, 1),
            (218.0, 91.0, 1),
            (182.0, 91.0, 2),
            (149.0, 136.0, 2),
            (146.0, 135.0, 2),
            (208.0, 123.0, 2),
            (209.0, 125.0, 2),
            (203.0, 201.0, 2),
            (203.0, 201.0, 2),
            (150.0, 181.0, 2),
        ],
    },
    CatalogGesture {
        name: "Her",
        points: &[
            (139.0, 95.0, 1),
            (254.0, 88.0, 1),
            (142.0, 93.0, 2),
            (101.0, 200.0, 2),
        ],
    },
    CatalogGesture {
        name: "Ji",
        points: &[
            (136.0, 87.0, 1),
            (128.0, 155.0, 1),
            (128.0, 152.0, 1),
            (192.0, 149.0, 1),
            (200.0, 82.0, 2),
            (194.0, 209.0, 2),
        ],
    },
    CatalogGesture {
        name: "Qui",
        points: &[
            (228.0, 101.0, 1),
            (166.0, 167.0, 1),
            (166.0, 169.0, 1),
            (220.0, 249.0, 1),
        ],
    },
    CatalogGesture {
        name: "Xi",
        points: &[
            (30.0, 7.0, 1),
            (103.0, 7.0, 1),
            (66.0, 7.0, 2),
            (66.0, 87.0, 2),
        ],
    },
    CatalogGesture {
        name: "Zhi",
        points: &[
            (124.0, 93.0, 1),
            (119.0, 159.0, 1),
            (120.0, 157.0, 1),
            (246.0, 159.0, 1),
            (252.0, 97.0, 2),
            (244.0, 157.0, 2),
            (190.0, 87.0, 3),
            (178.0, 197.0, 3),
            (99.0, 199.0, 4),
            (269.0, 211.0, 4),
        ],
    },
    CatalogGesture {
        name: "Chi",
        points: &[
            (200.0, 85.0, 1),
            (146.0, 135.0, 1),
            (234.0, 100.0, 2),
            (134.0, 205.0, 2),
            (204.0, 151.0, 3),
            (190.0, 273.0, 3),
        ],
    },
    CatalogGesture {
        name: "Shi",
        points: &[
            (150.0, 123.0, 1),
            (218.0, 125.0, 1),
            (222.0, 127.0, 1),
            (215.0, 175.0, 1),
            (150.0, 173.0, 2),
            (215.0, 179.0, 2),
            (216.0, 179.0, 2),
            (148.0, 175.0, 3),
            (148.0, 183.0, 3),
            (136.0, 210.0, 3),
            (134.0, 214.0, 3),
            (132.0, 217.0, 3),
            (116.0, 235.0, 3),
            (115.0, 237.0, 3),
        ],
    },
    CatalogGesture {
        name: "Ri",
        points: &[
            (143.0, 102.0, 1),
            (143.0, 221.0, 1),
            (140.0, 221.0, 2),
            (272.0, 207.0, 2),
            (146.0, 95.0, 2),
            (263.0, 85.0, 2),
            (264.0, 85.0, 3),
            (272.0, 206.0, 3),
            (196.0, 139.0, 4),
            (224.0, 169.0, 4),
        ],
    },
    CatalogGesture {
        name: "Zi",
        points: &[
            (173.0, 136.0, 1),
            (278.0, 125.0, 1),
            (280.0, 126.0, 1),
            (276.0, 191.0, 1),
            (276.0, 191.0, 1),
            (246.0, 175.0, 1),
            (227.0, 127.0, 2),
            (227.0, 277.0, 2),
        ],
    },
    CatalogGesture {
        name: "Ci",
        points: &[
            (142.0, 112.0, 1),
            (272.0, 113.0, 1),
            (211.0, 94.0, 2),
            (159.0, 157.0, 2),
            (153.0, 163.0, 2),
            (252.0, 162.0, 2),
            (252.0, 163.0, 2),
            (192.0, 229.0, 2),
        ],
    },
    CatalogGesture {
        name: "Si",
        points: &[
            (179.0, 108.0, 1),
            (142.0, 213.0, 1),
            (138.0, 213.0, 1),
            (241.0, 210.0, 1),
            (238.0, 193.0, 2),
            (252.0, 227.0, 2),
        ],
    },
    CatalogGesture {
        name: "Yi",
        points: &[(12.0, 347.0, 1), (119.0, 347.0, 1)],
    },
    CatalogGesture {
        name: "Wu",
        points: &[
            (30.0, 146.0, 1),
            (106.0, 222.0, 1),
            (30.0, 225.0, 2),
            (106.0, 146.0, 2),
        ],
    },
    CatalogGesture {
        name: "Yu",
        points: &[
            (130.0, 116.0, 1),
            (130.0, 206.0, 1),
            (132.0, 206.0, 1),
            (250.0, 217.0, 1),
            (256.0, 119.0, 2),
            (246.0, 214.0, 2),
        ],
    },
    CatalogGesture {
        name: "A",
        points: &[
            (131.0, 121.0, 1),
            (182.0, 187.0, 1),
            (241.0, 121.0, 2),
            (191.0, 186.0, 2),
            (187.0, 189.0, 3),
            (186.0, 315.0, 3),
        ],
    },
    CatalogGesture {
        name: "O",
        points: &[
            (170.0, 112.0, 1),
            (211.0, 110.0, 1),
            (273.0, 109.0, 1),
            (303.0, 110.0, 1),
            (338.0, 109.0, 1),
            (358.0, 112.0, 1),
            (270.0, 112.0, 2),
            (268.0, 145.0, 2),
            (268.0, 155.0, 2),
            (266.0, 169.0, 2),
            (266.0, 171.0, 2),
            (254.0, 183.0, 2),
            (245.0, 182.0, 2),
            (240.0, 182.0, 2),
            (210.0, 189.0, 2),
            (191.0, 203.0, 2),
            (189.0, 205.0, 2),
            (187.0, 207.0, 2),
            (182.0, 215.0, 2),
            (182.0, 217.0, 2),
            (181.0, 220.0, 2),
            (181.0, 223.0, 2),
            (181.0, 225.0, 2),
            (181.0, 227.0, 2),
            (182.0, 235.0, 2),
            (184.0, 239.0, 2),
            (186.0, 242.0, 2),
            (188.0, 245.0, 2),
            (190.0, 248.0, 2),
            (192.0, 250.0, 2),
            (205.0, 261.0, 2),
            (212.0, 265.0, 2),
            (218.0, 269.0, 2),
            (223.0, 273.0, 2),
            (224.0, 275.0, 2),
            (230.0, 279.0, 2),
            (236.0, 281.0, 2),
            (243.0, 284.0, 2),
            (247.0, 285.0, 2),
            (252.0, 286.0, 2),
            (256.0, 287.0, 2),
            (283.0, 291.0, 2),
            (288.0, 291.0, 2),
            (290.0, 291.0, 2),
            (292.0, 291.0, 2),
            (295.0, 291.0, 2),
            (297.0, 291.0, 2),
            (299.0, 291.0, 2),
            (302.0, 290.0, 2),
            (304.0, 289.0, 2),
            (307.0, 288.0, 2),
            (309.0, 287.0, 2),
            (311.0, 286.0, 2),
            (314.0, 285.0, 2),
            (321.0, 281.0, 2),
            (325.0, 277.0, 2),
            (326.0, 275.0, 2),
            (328.0, 271.0, 2),
            (330.0, 270.0, 2),
        ],
    },
    CatalogGesture {
        name: "E",
        points: &[
            (136.0, 137.0, 1),
            (162.0, 132.0, 1),
            (192.0, 128.0, 1),
            (226.0, 126.0, 1),
            (286.0, 129.0, 1),
            (302.0, 128.0, 1),
            (230.0, 88.0, 2),
            (230.0, 89.0, 2),
            (230.0, 91.0, 2),
            (230.0, 94.0, 2),
            (230.0, 97.0, 2),
            (230.0, 99.0, 2),
            (230.0, 101.0, 2),
            (230.0, 105.0, 2),
            (231.0, 109.0, 2),
            (232.0, 113.0, 2),
            (233.0, 117.0, 2),
            (234.0, 121.0, 2),
            (234.0, 126.0, 2),
            (234.0, 129.0, 2),
            (234.0, 133.0, 2),
            (235.0, 137.0, 2),
            (235.0, 140.0, 2),
            (235.0, 143.0, 2),
            (235.0, 149.0, 2),
            (235.0, 151.0, 2),
            (235.0, 153.0, 2),
            (235.0, 155.0, 2),
            (236.0, 157.0, 2),
            (236.0, 159.0, 2),
            (236.0, 161.0, 2),
            (236.0, 163.0, 2),
            (236.0, 164.0, 2),
            (236.0, 165.0, 2),
            (236.0, 166.0, 2),
            (236.0, 167.0, 2),
            (237.0, 167.0, 2),
            (237.0, 168.0, 2),
            (235.0, 169.0, 2),
            (234.0, 169.0, 2),
            (230.0, 169.0, 2),
            (228.0, 169.0, 2),
            (221.0, 170.0, 2),
            (202.0, 174.0, 2),
            (188.0, 180.0, 2),
            (186.0, 181.0, 2),
            (182.0, 182.0, 2),
            (179.0, 185.0, 2),
            (176.0, 188.0, 2),
            (176.0, 189.0, 2),
            (174.0, 192.0, 2),
            (172.0, 197.0, 2),
            (171.0, 200.0, 2),
            (171.0, 208.0, 2),
            (174.0, 216.0, 2),
            (174.0, 219.0, 2),
            (176.0, 220.0, 2),
            (180.0, 227.0, 2),
            (182.0, 229.0, 2),
            (183.0, 231.0, 2),
            (191.0, 235.0, 2),
            (193.0, 237.0, 2),
            (195.0, 237.0, 2),
            (206.0, 241.0, 2),
            (208.0, 242.0, 2),
            (210.0, 243.0, 2),
            (220.0, 246.0, 2),
            (222.0, 246.0, 2),
            (228.0, 246.0, 2),
            (236.0, 246.0, 2),
            (238.0, 246.0, 2),
            (241.0, 245.0, 2),
            (246.0, 244.0, 2),
            (250.0, 242.0, 2),
            (252.0, 241.0, 2),
        ],
    },
    CatalogGesture {
        name: "Eh",
        points: &[
            (107.0, 198.0, 1),
            (230.0, 199.0, 1),
            (206.0, 170.0, 2),
            (190.0, 264.0, 2),
            (140.0, 173.0, 3),
            (126.0, 298.0, 3),
            (128.0, 297.0, 3),
            (253.0, 300.0, 3),
        ],
    },
    CatalogGesture {
        name: "Ai",
        points: &[
            (108.0, 125.0, 1),
            (186.0, 124.0, 1),
            (130.0, 131.0, 2),
            (88.0, 176.0, 2),
            (84.0, 176.0, 2),
            (184.0, 171.0, 2),
            (187.0, 171.0, 2),
            (144.0, 236.0, 2),
            (148.0, 130.0, 3),
            (98.0, 223.0, 3),
        ],
    },
    CatalogGesture {
        name: "Ei",
        points: &[
            (164.0, 207.0, 1),
            (206.0, 181.0, 1),
            (210.0, 180.0, 1),
            (213.0, 198.0, 1),
            (214.0, 207.0, 1),
            (246.0, 279.0, 1),
            (248.0, 281.0, 1),
            (259.0, 296.0, 1),
            (260.0, 298.0, 1),
            (262.0, 303.0, 1),
            (262.0, 304.0, 1),
            (264.0, 305.0, 1),
            (264.0, 307.0, 1),
            (264.0, 307.0, 1),
        ],
    },
    CatalogGesture {
        name: "Ao",
        points: &[
            (154.0, 114.0, 1),
            (118.0, 178.0, 1),
            (117.0, 177.0, 1),
            (162.0, 175.0, 1),
            (203.0, 129.0, 2),
            (126.0, 244.0, 2),
            (124.0, 249.0, 2),
            (222.0, 227.0, 2),
            (220.0, 211.0, 3),
            (238.0, 249.0, 3),
        ],
    },
    CatalogGesture {
        name: "Ou",
        points: &[
            (172.0, 163.0, 1),
            (234.0, 153.0, 1),
            (235.0, 154.0, 1),
            (157.0, 256.0, 1),
            (164.0, 196.0, 2),
            (243.0, 253.0, 2),
        ],
    },
    CatalogGesture {
        name: "An",
        points: &[
            (137.0, 129.0, 1),
            (147.0, 129.0, 1),
            (160.0, 127.0, 1),
            (200.0, 125.0, 1),
            (220.0, 124.0, 1),
            (223.0, 124.0, 1),
            (224.0, 123.0, 1),
            (230.0, 123.0, 1),
            (232.0, 122.0, 1),
            (232.0, 124.0, 1),
            (230.0, 127.0, 1),
            (217.0, 152.0, 1),
            (214.0, 157.0, 1),
            (212.0, 160.0, 1),
            (207.0, 167.0, 1),
            (202.0, 173.0, 1),
            (164.0, 131.0, 2),
            (162.0, 131.0, 2),
            (160.0, 135.0, 2),
            (158.0, 139.0, 2),
            (156.0, 142.0, 2),
            (148.0, 153.0, 2),
            (144.0, 159.0, 2),
            (143.0, 161.0, 2),
            (140.0, 165.0, 2),
            (138.0, 167.0, 2),
            (138.0, 168.0, 2),
            (139.0, 169.0, 2),
            (146.0, 171.0, 2),
            (154.0, 173.0, 2),
            (180.0, 175.0, 2),
            (186.0, 175.0, 2),
            (194.0, 175.0, 2),
            (202.0, 176.0, 2),
            (210.0, 176.0, 2),
            (217.0, 176.0, 2),
            (224.0, 176.0, 2),
            (248.0, 176.0, 2),
            (250.0, 176.0, 2),
            (252.0, 177.0, 2),
            (252.0, 177.0, 2),
            (256.0, 177.0, 2),
            (257.0, 177.0, 2),
            (258.0, 177.0, 2),
            (256.0, 187.0, 2),
            (246.0, 201.0, 2),
            (241.0, 207.0, 2),
            (236.0, 213.0, 2),
            (233.0, 217.0, 2),
            (230.0, 221.0, 2),
            (227.0, 225.0, 2),
            (224.0, 227.0, 2),
            (221.0, 231.0, 2),
            (218.0, 233.0, 2),
            (209.0, 239.0, 2),
            (208.0, 240.0, 2),
        ],
    },
    CatalogGesture {
        name: "En",
        points: &[
            (188.0, 143.0, 1),
            (148.0, 210.0, 1),
            (151.0, 205.0, 1),
            (236.0, 201.0, 1),
            (241.0, 204.0, 1),
            (176.0, 295.0, 1),
        ],
    },
    CatalogGesture {
        name: "Ang",
        points: &[
            (152.0, 153.0, 1),
            (256.0, 143.0, 1),
            (203.0, 124.0, 2),
            (203.0, 126.0, 2),
            (199.0, 153.0, 2),
            (190.0, 176.0, 2),
            (182.0, 193.0, 2),
            (180.0, 201.0, 2),
            (170.0, 221.0, 2),
            (163.0, 228.0, 2),
            (161.0, 229.0, 2),
            (158.0, 233.0, 2),
            (157.0, 234.0, 2),
            (156.0, 235.0, 2),
            (152.0, 238.0, 2),
            (152.0, 238.0, 2),
            (150.0, 237.0, 2),
            (204.0, 156.0, 3),
            (214.0, 228.0, 3),
            (216.0, 229.0, 3),
            (310.0, 224.0, 3),
        ],
    },
    CatalogGesture {
        name: "Eng",
        points: &[
            (198.0, 139.0, 1),
            (167.0, 237.0, 1),
            (166.0, 235.0, 1),
            (296.0, 237.0, 1),
        ],
    },
    CatalogGesture {
        name: "Er",
        points: &[
            (160.0, 98.0, 1),
            (158.0, 119.0, 1),
            (121.0, 206.0, 1),
            (112.0, 220.0, 1),
            (108.0, 225.0, 1),
            (106.0, 228.0, 1),
            (101.0, 235.0, 1),
            (98.0, 238.0, 1),
            (96.0, 242.0, 1),
            (92.0, 247.0, 1),
            (210.0, 98.0, 2),
            (201.0, 203.0, 2),
            (202.0, 238.0, 2),
            (202.0, 235.0, 2),
            (236.0, 245.0, 2),
            (273.0, 245.0, 2),
            (282.0, 245.0, 2),
            (283.0, 244.0, 2),
        ],
    },
];
